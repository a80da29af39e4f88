use crate::{
    config::Config,
    port::PortManager,
    process::ProcessManager,
    ui,
    utils::validate_port,
    Result,
};
use colored::Colorize;
use dialoguer::Confirm;

pub struct CheckCommand;

impl CheckCommand {
    /// Show who listens on `port` and offer to kill each process.
    ///
    /// In JSON mode nothing is killed; the findings are printed instead.
    pub async fn execute(port: i64, config: &Config, quiet: bool, json: bool) -> Result<()> {
        let port = validate_port(port)?;
        let port_manager = PortManager::from_config(config);
        let process_manager = ProcessManager::from_config(config);

        let processes = port_manager.find_processes(port).await;

        if json {
            let json_output = serde_json::json!({
                "port": port,
                "status": if processes.is_empty() { "free" } else { "in_use" },
                "processes": processes,
            });
            super::print_json(&json_output)?;
            return Ok(());
        }

        if processes.is_empty() {
            if !quiet {
                println!();
                println!("{}", ui::port_free(port));
                println!();
            }
            return Ok(());
        }

        for process in &processes {
            if !quiet {
                println!("{}", ui::process_info(port, process));
            }

            let prompt = format!(
                "Kill {} (PID: {})?",
                process.name.yellow(),
                process.pid.to_string().cyan()
            );
            let confirmed = Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()?;

            if confirmed {
                if process_manager.kill_process(process.pid).await {
                    println!("{}", ui::kill_success(port, process.pid));
                } else {
                    eprintln!("{}", ui::kill_failed(process.pid));
                }
            } else if !quiet {
                println!("{}", ui::skipped());
            }
            if !quiet {
                println!();
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_rejects_invalid_ports() {
        let config = Config::default();

        for port in [0, -1, 65536, 99999] {
            let result = CheckCommand::execute(port, &config, true, true).await;
            assert!(matches!(result, Err(crate::Error::InvalidPort(_))));
        }
    }

    #[tokio::test]
    async fn test_check_json_with_missing_lsof() {
        // A missing tool reads as "no listeners" rather than an error.
        let config = Config {
            lsof_path: "/nonexistent/redpill-lsof".to_string(),
            ..Config::default()
        };

        assert!(CheckCommand::execute(3000, &config, false, true)
            .await
            .is_ok());
    }
}
