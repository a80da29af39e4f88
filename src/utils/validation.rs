use crate::Result;

/// Lowest port number a listener can bind to.
pub const MIN_PORT: i64 = 1;
/// Highest port number a listener can bind to.
pub const MAX_PORT: i64 = 65535;

/// True iff `port` is in `1..=65535`.
pub fn is_valid_port(port: i64) -> bool {
    (MIN_PORT..=MAX_PORT).contains(&port)
}

pub fn validate_port(port: i64) -> Result<u16> {
    if !is_valid_port(port) {
        return Err(crate::Error::InvalidPort(port.to_string()));
    }
    // In range, so the conversion cannot fail.
    u16::try_from(port).map_err(|_| crate::Error::InvalidPort(port.to_string()))
}
