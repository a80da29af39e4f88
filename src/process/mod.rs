pub mod query;
pub mod signal;

use std::time::Duration;

use tracing::debug;

use crate::config::Config;

pub use query::{LsofQuery, SystemQuery};
pub use signal::{KillSignal, NixSignaller, Signaller};

/// Terminates processes: SIGTERM, wait for exit, SIGKILL if it lingers.
pub struct ProcessManager<S = NixSignaller> {
    signaller: S,
    poll_attempts: u32,
    poll_interval: Duration,
}

impl ProcessManager {
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_signaller(
            NixSignaller::new(),
            config.kill_poll_attempts,
            config.kill_poll_interval,
        )
    }
}

impl<S: Signaller> ProcessManager<S> {
    pub fn with_signaller(signaller: S, poll_attempts: u32, poll_interval: Duration) -> Self {
        Self {
            signaller,
            poll_attempts,
            poll_interval,
        }
    }

    /// Kill `pid`, returning `false` only when SIGTERM could not be sent.
    ///
    /// After SIGTERM the pid is probed up to `poll_attempts` times, pausing
    /// `poll_interval` after each probe that finds it alive. A process that
    /// outlives the polling gets SIGKILL; a failure there counts as success.
    pub async fn kill_process(&self, pid: u32) -> bool {
        if let Err(e) = self.signaller.send(pid, KillSignal::Terminate) {
            debug!(pid, error = %e, "SIGTERM failed");
            return false;
        }

        if self.wait_for_exit(pid).await {
            debug!(pid, "process exited after SIGTERM");
            return true;
        }

        debug!(pid, "process still alive, sending SIGKILL");
        if let Err(e) = self.signaller.send(pid, KillSignal::Kill) {
            debug!(pid, error = %e, "SIGKILL failed, assuming process already exited");
        }

        true
    }

    /// True once a probe fails; false if every probe found the process alive.
    async fn wait_for_exit(&self, pid: u32) -> bool {
        for _ in 0..self.poll_attempts {
            if self.signaller.send(pid, KillSignal::Probe).is_err() {
                return true;
            }
            tokio::time::sleep(self.poll_interval).await;
        }
        false
    }
}

impl Default for ProcessManager {
    fn default() -> Self {
        Self::new()
    }
}
