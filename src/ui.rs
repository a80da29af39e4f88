use colored::Colorize;

use crate::port::{PortListing, ProcessRecord};

/// Commands longer than this are cut in the list table.
pub const MAX_COMMAND_WIDTH: usize = 50;

pub fn process_info(port: u16, process: &ProcessRecord) -> String {
    format!(
        "\n  {} {} {}\n\n    {:<9}{}\n    {:<9}{}\n    {:<9}{}\n    {:<9}{}\n",
        "●".red(),
        "Port".bold(),
        port.to_string().yellow().bold(),
        "PID",
        process.pid.to_string().cyan(),
        "Name",
        process.name.bold(),
        "User",
        process.user,
        "Command",
        process.command.dimmed(),
    )
}

pub fn port_free(port: u16) -> String {
    format!("  {} Port {} is free", "✓".green(), port.to_string().yellow())
}

pub fn kill_success(port: u16, pid: u32) -> String {
    format!(
        "  {} Killed PID {} on port {}",
        "✓".green(),
        pid.to_string().cyan(),
        port.to_string().yellow()
    )
}

pub fn kill_failed(pid: u32) -> String {
    format!(
        "  {} Failed to kill PID {}. Try running with sudo",
        "×".red(),
        pid.to_string().cyan()
    )
}

pub fn skipped() -> String {
    format!("  {} Skipped", "○".blue())
}

pub fn error(message: &str) -> String {
    format!("{} {}", "Error:".red(), message)
}

pub fn list_header() -> String {
    format!(
        "\n  {}\n\n  {:<8}{:<10}{:<14}{:<18}{}",
        "redpill · listening ports".bold().green(),
        "PORT".cyan().bold(),
        "PID".cyan().bold(),
        "USER".cyan().bold(),
        "NAME".cyan().bold(),
        "COMMAND".cyan().bold(),
    )
}

pub fn list_row(listing: &PortListing) -> String {
    let process = &listing.process;
    format!(
        "  {:<8}{:<10}{:<14}{:<18}{}",
        listing.port.to_string().yellow(),
        process.pid,
        process.user,
        process.name,
        truncate(&process.command, MAX_COMMAND_WIDTH).dimmed(),
    )
}

pub fn list_footer(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("\n  {count} port{plural} in use\n")
}

pub fn list_empty() -> String {
    format!("  {} No listening ports found", "○".blue())
}

pub fn freeing_summary(freed: usize, total: usize) -> String {
    if total == 0 {
        return format!("\n  {} No processes found on the given ports\n", "○".blue());
    }
    let plural = if total == 1 { "" } else { "es" };
    format!(
        "\n  {} Freed {} of {} process{plural}\n",
        if freed == total { "✓".green() } else { "!".yellow() },
        freed,
        total
    )
}

/// Cut `s` to at most `width` characters, ending in `…` when shortened.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut cut: String = s.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProcessRecord {
        ProcessRecord {
            pid: 1234,
            name: "node".to_string(),
            user: "neo".to_string(),
            command: "next dev".to_string(),
        }
    }

    #[test]
    fn test_process_info_shows_details() {
        let text = process_info(3000, &record());
        for expected in ["3000", "1234", "node", "neo", "next dev"] {
            assert!(text.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_status_messages() {
        assert!(port_free(3000).contains("3000"));
        assert!(port_free(3000).contains("free"));

        let text = kill_success(3000, 1234);
        assert!(text.contains("Killed"));
        assert!(text.contains("1234"));
        assert!(text.contains("3000"));

        let text = kill_failed(1234);
        assert!(text.contains("Failed"));
        assert!(text.contains("1234"));
        assert!(text.contains("sudo"));

        assert!(skipped().contains("Skipped"));
        assert!(error("Something went wrong").contains("Something went wrong"));
    }

    #[test]
    fn test_list_header_columns() {
        let text = list_header();
        for column in ["PORT", "PID", "USER", "NAME", "COMMAND", "redpill"] {
            assert!(text.contains(column), "missing {column}");
        }
    }

    #[test]
    fn test_list_row_and_truncation() {
        let listing = PortListing {
            port: 3000,
            process: record(),
        };
        let text = list_row(&listing);
        for expected in ["3000", "1234", "node", "next dev"] {
            assert!(text.contains(expected), "missing {expected}");
        }

        let long = PortListing {
            port: 3000,
            process: ProcessRecord {
                command: "a".repeat(100),
                ..record()
            },
        };
        assert!(list_row(&long).contains('…'));
    }

    #[test]
    fn test_list_footer_plural() {
        assert!(list_footer(1).contains("1 port in use"));
        assert!(list_footer(3).contains("3 ports in use"));
        assert!(list_empty().contains("No listening ports found"));
    }

    #[test]
    fn test_freeing_summary() {
        let text = freeing_summary(3, 5);
        assert!(text.contains("Freed"));
        assert!(text.contains('3'));
        assert!(text.contains('5'));

        assert!(freeing_summary(0, 0).contains("No processes found"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("0123456789abc", 10), "012345678…");
        assert_eq!(truncate("日本語のコマンド", 4), "日本語…");
    }
}
