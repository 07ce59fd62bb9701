use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Uploads above this size are rejected before extraction (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
/// Request body cap for the JSON matching endpoints (16 MiB); batches carry full profiles.
pub const DEFAULT_MAX_JSON_BYTES: usize = 16 * 1024 * 1024;
pub const DEFAULT_EXTRACTION_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub max_json_bytes: usize,
    pub extraction_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_json_bytes: DEFAULT_MAX_JSON_BYTES,
            extraction_timeout: Duration::from_secs(DEFAULT_EXTRACTION_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            max_json_bytes: parse_env("MAX_JSON_BYTES", defaults.max_json_bytes)?,
            extraction_timeout: Duration::from_secs(parse_env(
                "EXTRACTION_TIMEOUT_SECS",
                DEFAULT_EXTRACTION_TIMEOUT_SECS,
            )?),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
        assert_eq!(config.max_json_bytes, 16 * 1024 * 1024);
        assert_eq!(config.extraction_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_parse_env_missing_uses_default() {
        let value: u16 = parse_env("MATCHER_TEST_UNSET_VARIABLE", 4242).unwrap();
        assert_eq!(value, 4242);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("MATCHER_TEST_BAD_PORT", "eighty");
        let result: Result<u16> = parse_env("MATCHER_TEST_BAD_PORT", 8080);
        std::env::remove_var("MATCHER_TEST_BAD_PORT");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("MATCHER_TEST_BAD_PORT"));
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("MATCHER_TEST_TIMEOUT", " 12 ");
        let value: u64 = parse_env("MATCHER_TEST_TIMEOUT", 30).unwrap();
        std::env::remove_var("MATCHER_TEST_TIMEOUT");
        assert_eq!(value, 12);
    }
}
