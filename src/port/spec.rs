use crate::utils::is_valid_port;

/// Expand port tokens (`"3000"`, `"3000-3010"`) into port numbers.
///
/// Tokens that do not parse, reversed ranges and ranges with an endpoint
/// outside `1..=65535` contribute nothing. Output follows token order and
/// is neither sorted nor deduplicated across tokens.
pub fn parse_ports<S: AsRef<str>>(tokens: &[S]) -> Vec<u16> {
    let mut ports = Vec::new();

    for token in tokens {
        let token = token.as_ref().trim();

        if let Some((start_str, end_str)) = token.split_once('-') {
            let (Some(start), Some(end)) = (parse_port(start_str), parse_port(end_str)) else {
                continue;
            };
            if start > end {
                continue;
            }
            ports.extend(start..=end);
        } else if let Some(port) = parse_port(token) {
            ports.push(port);
        }
    }

    ports
}

/// Whole-token integer parse: `"3000abc"`, `"3000.5"` and `"1-2-3"` are rejected
/// rather than read up to their first non-digit.
fn parse_port(s: &str) -> Option<u16> {
    let n = s.trim().parse::<i64>().ok()?;
    if !is_valid_port(n) {
        return None;
    }
    u16::try_from(n).ok()
}
