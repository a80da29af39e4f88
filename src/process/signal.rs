use crate::Result;

/// Signals the terminator sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillSignal {
    /// SIGTERM
    Terminate,
    /// SIGKILL
    Kill,
    /// Signal 0: delivers nothing, only checks the pid.
    Probe,
}

/// Delivers signals to processes.
pub trait Signaller {
    /// Send `signal` to `pid`. Fails if the pid is gone or not ours to signal.
    fn send(&self, pid: u32, signal: KillSignal) -> Result<()>;
}

/// `Signaller` using `kill(2)` via nix.
#[derive(Debug, Default, Clone, Copy)]
pub struct NixSignaller;

impl NixSignaller {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
impl Signaller for NixSignaller {
    fn send(&self, pid: u32, signal: KillSignal) -> Result<()> {
        use nix::errno::Errno;
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;

        // kill(2) treats 0 and negative pids as process groups.
        let raw = match i32::try_from(pid) {
            Ok(raw) if raw > 0 => raw,
            _ => return Err(crate::Error::ProcessNotFound(pid)),
        };

        let signal = match signal {
            KillSignal::Terminate => Some(Signal::SIGTERM),
            KillSignal::Kill => Some(Signal::SIGKILL),
            KillSignal::Probe => None,
        };

        kill(Pid::from_raw(raw), signal).map_err(|errno| match errno {
            Errno::ESRCH => crate::Error::ProcessNotFound(pid),
            Errno::EPERM => crate::Error::PermissionDenied(format!(
                "not allowed to signal process {pid}"
            )),
            other => other.into(),
        })
    }
}

#[cfg(not(unix))]
impl Signaller for NixSignaller {
    fn send(&self, _pid: u32, _signal: KillSignal) -> Result<()> {
        Err(crate::Error::Other(
            "signals are only supported on Unix".to_string(),
        ))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_probe_current_process() {
        let signaller = NixSignaller::new();
        assert!(signaller
            .send(std::process::id(), KillSignal::Probe)
            .is_ok());
    }

    #[test]
    fn test_zero_pid_is_rejected() {
        let signaller = NixSignaller::new();
        let err = signaller.send(0, KillSignal::Probe).unwrap_err();
        assert!(matches!(err, crate::Error::ProcessNotFound(0)));
    }

    #[test]
    fn test_pid_beyond_i32_is_rejected() {
        let signaller = NixSignaller::new();
        let err = signaller.send(u32::MAX, KillSignal::Terminate).unwrap_err();
        assert!(matches!(err, crate::Error::ProcessNotFound(_)));
    }

    #[test]
    fn test_terminate_exited_child() {
        let mut child = std::process::Command::new("true")
            .spawn()
            .expect("spawn true");
        let pid = child.id();
        child.wait().expect("wait for child");

        // Reaped, so the pid no longer names a process.
        let signaller = NixSignaller::new();
        assert!(signaller.send(pid, KillSignal::Probe).is_err());
    }
}
