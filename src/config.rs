use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration gathered from environment variables.
///
/// `DASHAUTH_DATA_DIR` points at the folder holding the local key-value file
/// (the localStorage stand-in). `DASHAUTH_LOGIN_DELAY_MS` is the artificial
/// latency applied to every login attempt; it models the async boundary a real
/// backend would have and carries no other meaning, so tests set it to zero.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub login_delay: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let data_dir = std::env::var("DASHAUTH_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let delay_ms = std::env::var("DASHAUTH_LOGIN_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(1_000);
        Self {
            data_dir: PathBuf::from(data_dir),
            login_delay: Duration::from_millis(delay_ms),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            login_delay: Duration::from_millis(1_000),
        }
    }
}
