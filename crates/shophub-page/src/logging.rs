//! Log subscriber setup.
//!
//! The library crates only emit `tracing` events. Hosts that want them
//! printed call [`init_logging`] once at startup.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON lines (for log aggregation).
    Json,
    /// Human-readable lines (for development).
    #[default]
    Human,
}

/// Install a global subscriber writing to stderr.
///
/// `RUST_LOG` overrides the configured filter. Fails if the filter does
/// not parse or a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter)
            .map_err(|e| anyhow!("invalid log filter {:?}: {}", config.filter, e))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Human => builder.try_init(),
    };

    installed.map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_names() {
        let json = serde_json::to_string(&LogFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
        let human: LogFormat = serde_json::from_str("\"human\"").unwrap();
        assert_eq!(human, LogFormat::Human);
    }

    #[test]
    fn test_second_init_fails() {
        let config = LoggingConfig::default();
        // Another test in this binary may have installed one first.
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
