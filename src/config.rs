use std::time::Duration;

/// Environment variable overriding the `lsof` binary.
pub const LSOF_ENV: &str = "REDPILL_LSOF";
/// Environment variable overriding the `ps` binary.
pub const PS_ENV: &str = "REDPILL_PS";
/// Environment variable overriding the number of liveness probes after SIGTERM.
pub const KILL_ATTEMPTS_ENV: &str = "REDPILL_KILL_ATTEMPTS";
/// Environment variable overriding the pause between probes, in milliseconds.
pub const KILL_INTERVAL_ENV: &str = "REDPILL_KILL_INTERVAL_MS";

const DEFAULT_KILL_POLL_ATTEMPTS: u32 = 10;
const DEFAULT_KILL_POLL_INTERVAL_MS: u64 = 100;

/// Runtime settings for the system queries and the terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub lsof_path: String,
    pub ps_path: String,
    pub kill_poll_attempts: u32,
    pub kill_poll_interval: Duration,
}

impl Config {
    /// Defaults, overridden by any `REDPILL_*` variables that are set and valid.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(LSOF_ENV).filter(|p| !p.trim().is_empty()) {
            config.lsof_path = path;
        }
        if let Some(path) = lookup(PS_ENV).filter(|p| !p.trim().is_empty()) {
            config.ps_path = path;
        }
        if let Some(attempts) = lookup(KILL_ATTEMPTS_ENV).and_then(|v| v.trim().parse().ok()) {
            config.kill_poll_attempts = attempts;
        }
        if let Some(ms) = lookup(KILL_INTERVAL_ENV).and_then(|v| v.trim().parse::<u64>().ok()) {
            config.kill_poll_interval = Duration::from_millis(ms);
        }

        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lsof_path: "lsof".to_string(),
            ps_path: "ps".to_string(),
            kill_poll_attempts: DEFAULT_KILL_POLL_ATTEMPTS,
            kill_poll_interval: Duration::from_millis(DEFAULT_KILL_POLL_INTERVAL_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.lsof_path, "lsof");
        assert_eq!(config.ps_path, "ps");
        assert_eq!(config.kill_poll_attempts, 10);
        assert_eq!(config.kill_poll_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (LSOF_ENV, "/opt/bin/lsof"),
            (PS_ENV, "/opt/bin/ps"),
            (KILL_ATTEMPTS_ENV, "3"),
            (KILL_INTERVAL_ENV, "25"),
        ]));

        assert_eq!(config.lsof_path, "/opt/bin/lsof");
        assert_eq!(config.ps_path, "/opt/bin/ps");
        assert_eq!(config.kill_poll_attempts, 3);
        assert_eq!(config.kill_poll_interval, Duration::from_millis(25));
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            (LSOF_ENV, "  "),
            (KILL_ATTEMPTS_ENV, "many"),
            (KILL_INTERVAL_ENV, "-5"),
        ]));

        assert_eq!(config, Config::default());
    }
}
