use crate::{config::Config, port::PortManager, ui, Result};

pub struct ListCommand;

impl ListCommand {
    /// Print every listening TCP port with its owning process.
    pub async fn execute(config: &Config, quiet: bool, json: bool) -> Result<()> {
        let port_manager = PortManager::from_config(config);
        let listings = port_manager.list_all_listening().await;

        if json {
            let json_output = serde_json::json!({
                "total": listings.len(),
                "ports": listings,
            });
            super::print_json(&json_output)?;
            return Ok(());
        }

        if quiet {
            return Ok(());
        }

        if listings.is_empty() {
            println!("{}", ui::list_empty());
            return Ok(());
        }

        println!("{}", ui::list_header());
        for listing in &listings {
            println!("{}", ui::list_row(listing));
        }
        println!("{}", ui::list_footer(listings.len()));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_with_missing_lsof() {
        let config = Config {
            lsof_path: "/nonexistent/redpill-lsof".to_string(),
            ..Config::default()
        };

        assert!(ListCommand::execute(&config, false, false).await.is_ok());
        assert!(ListCommand::execute(&config, false, true).await.is_ok());
    }
}
