//! Row parsing for `lsof -i -P -n -sTCP:LISTEN` output.
//!
//! ```text
//! COMMAND   PID  USER   FD   TYPE   DEVICE SIZE/OFF NODE NAME
//! node    12345 alice   22u  IPv6 0xabc        0t0  TCP *:3000 (LISTEN)
//! ```

use tracing::debug;

/// Minimum number of whitespace-separated columns in a usable row.
const MIN_FIELDS: usize = 9;
/// Column holding `host:port` (`NAME`).
const ADDRESS_FIELD: usize = 8;

/// One usable data row, borrowed from the raw output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LsofRow<'a> {
    pub name: &'a str,
    pub pid: u32,
    pub user: &'a str,
    pub address: &'a str,
}

/// Parse every data row, skipping the header and any malformed row.
pub fn parse_rows(output: &str) -> Vec<LsofRow<'_>> {
    output
        .trim()
        .lines()
        .skip(1) // header
        .filter_map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> Option<LsofRow<'_>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        debug!(line, "skipping short lsof row");
        return None;
    }

    let pid = match fields[1].parse::<u32>() {
        Ok(pid) => pid,
        Err(_) => {
            debug!(line, "skipping lsof row with non-numeric pid");
            return None;
        }
    };

    Some(LsofRow {
        name: fields[0],
        pid,
        user: fields[2],
        address: fields[ADDRESS_FIELD],
    })
}

/// Port from the trailing `:digits` of an address such as `*:3000` or `[::1]:8080`.
pub fn parse_address_port(address: &str) -> Option<u16> {
    let (_, digits) = address.rsplit_once(':')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u16>().ok()
}
