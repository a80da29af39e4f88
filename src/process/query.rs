use std::process::Stdio;

use tokio::process::Command as TokioCommand;
use tracing::debug;

use crate::{config::Config, Result};

/// The OS facilities the resolver reads from.
///
/// Implementations return the raw text of each query, or an error when the
/// tool is missing, exits non-zero or prints nothing.
#[allow(async_fn_in_trait)]
pub trait SystemQuery {
    /// Tabular listing of TCP listening sockets, restricted to `port` when given.
    async fn listening_sockets(&self, port: Option<u16>) -> Result<String>;

    /// Full command line of `pid`.
    async fn command_line(&self, pid: u32) -> Result<String>;
}

/// `SystemQuery` backed by `lsof` and `ps`.
#[derive(Debug, Clone)]
pub struct LsofQuery {
    lsof_path: String,
    ps_path: String,
}

impl LsofQuery {
    pub fn new(config: &Config) -> Self {
        Self {
            lsof_path: config.lsof_path.clone(),
            ps_path: config.ps_path.clone(),
        }
    }

    fn lsof_args(port: Option<u16>) -> Vec<String> {
        let selector = match port {
            Some(port) => format!("-iTCP:{port}"),
            None => "-iTCP".to_string(),
        };
        vec![
            selector,
            "-P".to_string(), // numeric ports
            "-n".to_string(), // no host name resolution
            "-sTCP:LISTEN".to_string(),
        ]
    }

    async fn run(program: &str, args: &[String]) -> Result<String> {
        debug!(program, ?args, "running system query");

        let output = TokioCommand::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| crate::Error::CommandFailed(format!("{program} could not run: {e}")))?;

        if !output.status.success() {
            return Err(crate::Error::CommandFailed(format!(
                "{program} exited with {}",
                output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if stdout.trim().is_empty() {
            return Err(crate::Error::CommandFailed(format!(
                "{program} produced no output"
            )));
        }

        Ok(stdout)
    }
}

impl Default for LsofQuery {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl SystemQuery for LsofQuery {
    async fn listening_sockets(&self, port: Option<u16>) -> Result<String> {
        Self::run(&self.lsof_path, &Self::lsof_args(port)).await
    }

    async fn command_line(&self, pid: u32) -> Result<String> {
        let args = [
            "-p".to_string(),
            pid.to_string(),
            "-o".to_string(),
            "command=".to_string(),
        ];
        let stdout = Self::run(&self.ps_path, &args).await?;
        Ok(stdout.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lsof_args_scoped() {
        assert_eq!(
            LsofQuery::lsof_args(Some(3000)),
            vec!["-iTCP:3000", "-P", "-n", "-sTCP:LISTEN"]
        );
    }

    #[test]
    fn test_lsof_args_unscoped() {
        assert_eq!(
            LsofQuery::lsof_args(None),
            vec!["-iTCP", "-P", "-n", "-sTCP:LISTEN"]
        );
    }

    #[tokio::test]
    async fn test_missing_tool_is_an_error() {
        let query = LsofQuery::new(&Config {
            lsof_path: "/nonexistent/redpill-lsof".to_string(),
            ps_path: "/nonexistent/redpill-ps".to_string(),
            ..Config::default()
        });

        let err = query.listening_sockets(None).await.unwrap_err();
        assert!(matches!(err, crate::Error::CommandFailed(_)));

        let err = query.command_line(1).await.unwrap_err();
        assert!(matches!(err, crate::Error::CommandFailed(_)));
    }

    #[tokio::test]
    async fn test_command_line_of_current_process() {
        let query = LsofQuery::default();

        match query.command_line(std::process::id()).await {
            Ok(command) => {
                assert!(!command.is_empty());
                assert_eq!(command, command.trim());
            }
            Err(_) => {
                // ps may be unavailable in minimal containers
            }
        }
    }
}
