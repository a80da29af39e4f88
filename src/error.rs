use std::fmt;

/// Error types for the redpill application.
///
/// Resolution and termination never surface these to callers; they are
/// used at the system seams and by the command layer for usage errors.
#[derive(Debug, Clone)]
pub enum Error {
    /// I/O operation failed
    IoError(String),
    /// Failed to parse data
    ParseError(String),
    /// Operation requires elevated privileges
    PermissionDenied(String),
    /// Process with the specified PID was not found
    ProcessNotFound(u32),
    /// Invalid port number or range
    InvalidPort(String),
    /// System command execution failed
    CommandFailed(String),
    /// Other generic error
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IoError(msg) => write!(f, "I/O error: {msg}"),
            Error::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Error::PermissionDenied(msg) => {
                write!(
                    f,
                    "Permission denied: {msg}. Try running with 'sudo' for system processes"
                )
            }
            Error::ProcessNotFound(pid) => write!(f, "Process with PID {pid} not found"),
            Error::InvalidPort(msg) => {
                write!(f, "Invalid port: {msg}. Must be between 1 and 65535")
            }
            Error::CommandFailed(msg) => write!(f, "Command failed: {msg}"),
            Error::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::IoError(e.to_string())
    }
}

/// Keeps the whole context chain, outermost first.
impl From<anyhow::Error> for Error {
    fn from(e: anyhow::Error) -> Self {
        Error::Other(format!("{e:#}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::ParseError(e.to_string())
    }
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Other(e.to_string())
    }
}

#[cfg(unix)]
impl From<nix::errno::Errno> for Error {
    fn from(e: nix::errno::Errno) -> Self {
        Error::Other(e.desc().to_string())
    }
}

/// A specialized `Result` type for redpill operations.
pub type Result<T> = std::result::Result<T, Error>;
