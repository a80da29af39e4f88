use crate::{
    config::Config,
    port::{parse_ports, PortManager},
    process::ProcessManager,
    ui, Result,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

/// Result of one kill attempt during `free`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KillOutcome {
    pub port: u16,
    pub pid: u32,
    pub name: String,
    pub killed: bool,
}

pub struct FreeCommand;

impl FreeCommand {
    /// Kill every process listening on the given ports, without asking.
    pub async fn execute(
        tokens: &[String],
        config: &Config,
        quiet: bool,
        json: bool,
    ) -> Result<Vec<KillOutcome>> {
        if tokens.is_empty() {
            return Err(crate::Error::Other(
                "Please specify a port or range. Example: port free 3000-3010".to_string(),
            ));
        }

        let ports = parse_ports(tokens);
        if ports.is_empty() {
            return Err(crate::Error::Other(
                "No valid ports in the specified range.".to_string(),
            ));
        }

        let port_manager = PortManager::from_config(config);
        let process_manager = ProcessManager::from_config(config);

        let progress = if quiet || json || ports.len() < 2 {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(ports.len() as u64);
            bar.set_style(
                ProgressStyle::with_template("  {spinner} scanning port {msg} [{pos}/{len}]")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar
        };

        let mut outcomes = Vec::new();

        for port in ports {
            progress.set_message(port.to_string());

            for process in port_manager.find_processes(port).await {
                let killed = process_manager.kill_process(process.pid).await;

                if !quiet && !json {
                    let line = if killed {
                        ui::kill_success(port, process.pid)
                    } else {
                        ui::kill_failed(process.pid)
                    };
                    if progress.is_hidden() {
                        println!("{line}");
                    } else {
                        progress.println(line);
                    }
                }

                outcomes.push(KillOutcome {
                    port,
                    pid: process.pid,
                    name: process.name,
                    killed,
                });
            }

            progress.inc(1);
        }
        progress.finish_and_clear();

        let freed = outcomes.iter().filter(|o| o.killed).count();

        if json {
            let json_output = serde_json::json!({
                "freed": freed,
                "total": outcomes.len(),
                "results": outcomes,
            });
            super::print_json(&json_output)?;
        } else if !quiet {
            println!("{}", ui::freeing_summary(freed, outcomes.len()));
        }

        Ok(outcomes)
    }
}
