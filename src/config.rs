//! Configuration management for the bridge.
//!
//! Configuration can be set via environment variables:
//! - `DECAPTCHA_HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `DECAPTCHA_PORT` - Optional. Server port. Defaults to `8100`.
//! - `DECAPTCHA_KEEP_ALIVE_SECS` - Optional. Seconds between keep-alive bytes
//!   on an open `getTaskResult` stream. Defaults to `25`.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Bridge configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Interval between keep-alive bytes on an open result stream.
    ///
    /// Must stay under the idle-timeout window of intermediaries (reverse
    /// proxies commonly cut connections after 30 seconds of silence).
    pub keep_alive: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("DECAPTCHA_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = match std::env::var("DECAPTCHA_PORT") {
            Ok(v) => v.parse::<u16>().map_err(|e| {
                ConfigError::InvalidValue("DECAPTCHA_PORT".to_string(), e.to_string())
            })?,
            Err(_) => 8100,
        };

        let keep_alive = match std::env::var("DECAPTCHA_KEEP_ALIVE_SECS") {
            Ok(v) => {
                let secs = v.parse::<u64>().map_err(|e| {
                    ConfigError::InvalidValue(
                        "DECAPTCHA_KEEP_ALIVE_SECS".to_string(),
                        e.to_string(),
                    )
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(25),
        };

        Ok(Self {
            host,
            port,
            keep_alive,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8100,
            keep_alive: Duration::from_secs(25),
        }
    }
}
