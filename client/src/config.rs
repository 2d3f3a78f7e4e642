//! # Client Configuration
//!
//! Loaded from environment variables (and `.env`, via `dotenvy`) and
//! validated before any client is built, so a bad base URL fails at startup
//! rather than on the first request.
//!
//! | Variable | Default |
//! |---|---|
//! | `VIDVEST_API_URL` | `http://127.0.0.1:8000/api` |
//! | `VIDVEST_TIMEOUT_SECS` | `10` |
//! | `VIDVEST_SESSION_FILE` | `data/session.json` |
//! | `VIDVEST_LOG_DIR` | `logs` |
//! | `RUST_LOG` | `vidvest_client=info,warn` |
//!
//! The backend is treated as one logical host. Older screens talked to two
//! different hosts; a single `VIDVEST_API_URL` replaces both.

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("VIDVEST_API_URL is not a valid URL: {0}")]
    InvalidUrl(String),

    #[error("VIDVEST_API_URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("VIDVEST_TIMEOUT_SECS must be a number between 1 and 120, got '{0}'")]
    InvalidTimeout(String),
}

/// API client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    pub api_base_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
    /// Durable session file
    pub session_file: PathBuf,
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub log_dir: PathBuf,
    /// `EnvFilter` directive string
    pub log_level: String,
    /// Mirror log lines to stderr in addition to the log file
    pub log_to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: "vidvest_client=info,warn".to_string(),
            log_to_stderr: false,
        }
    }
}

impl ClientConfig {
    /// Config for `base_url` with default timeout and paths.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: parse_base_url(base_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_file: PathBuf::from("data/session.json"),
            log: LogConfig::default(),
        })
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url = env::var("VIDVEST_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let mut config = Self::new(&base_url)?;

        if let Ok(raw) = env::var("VIDVEST_TIMEOUT_SECS") {
            config.timeout = parse_timeout(&raw)?;
        }
        if let Ok(path) = env::var("VIDVEST_SESSION_FILE") {
            config.session_file = PathBuf::from(path);
        }
        if let Ok(dir) = env::var("VIDVEST_LOG_DIR") {
            config.log.log_dir = PathBuf::from(dir);
        }
        if let Ok(level) = env::var("RUST_LOG") {
            config.log.log_level = level;
        }
        config.log.log_to_stderr = env::var("VIDVEST_LOG_STDERR")
            .map(|v| v == "1")
            .unwrap_or(false);

        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl(format!("{raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
    }
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(raw.to_string()));
    }
    // Paths are appended as segments; normalize away a trailing slash.
    let trimmed = url.path().trim_end_matches('/').to_string();
    url.set_path(&trimmed);
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if (1..=MAX_TIMEOUT_SECS).contains(&secs) => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalization() {
        let config = ClientConfig::new("https://api.example.com/api/").unwrap();
        assert_eq!(config.api_base_url.as_str(), "https://api.example.com/api");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(ClientConfig::new("not a url"), Err(ConfigError::InvalidUrl(_))));
        assert_eq!(
            ClientConfig::new("ftp://example.com").unwrap_err(),
            ConfigError::UnsupportedScheme("ftp".to_string())
        );
    }

    #[test]
    fn test_timeout_bounds() {
        assert_eq!(parse_timeout("30").unwrap(), Duration::from_secs(30));
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("500").is_err());
        assert!(parse_timeout("soon").is_err());
    }
}
