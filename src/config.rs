use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://real-master-consult.preview.emergentagent.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_VALIDATION_STATUS: u16 = 422;

pub const BASE_URL_VAR: &str = "LEADPROBE_BASE_URL";
pub const TIMEOUT_VAR: &str = "LEADPROBE_TIMEOUT_SECS";
pub const VALIDATION_STATUS_VAR: &str = "LEADPROBE_VALIDATION_STATUS";
pub const REPORT_PATH_VAR: &str = "LEADPROBE_REPORT_PATH";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be an http(s) URL, got {value:?}")]
    InvalidUrl { name: &'static str, value: String },
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },
    #[error("{name} must be an HTTP status code, got {value:?}")]
    InvalidStatus { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    pub validation_status: u16,
    pub report_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            validation_status: DEFAULT_VALIDATION_STATUS,
            report_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from `lookup`; unset or blank variables fall
    /// back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Config::default();

        if let Some(value) = read(BASE_URL_VAR) {
            config.base_url = parse_base_url(value)?;
        }
        if let Some(value) = read(TIMEOUT_VAR) {
            let secs = value
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout {
                    name: TIMEOUT_VAR,
                    value,
                })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(value) = read(VALIDATION_STATUS_VAR) {
            config.validation_status = value
                .parse::<u16>()
                .ok()
                .filter(|status| (100..=599).contains(status))
                .ok_or(ConfigError::InvalidStatus {
                    name: VALIDATION_STATUS_VAR,
                    value,
                })?;
        }
        config.report_path = read(REPORT_PATH_VAR).map(PathBuf::from);
        Ok(config)
    }
}

fn parse_base_url(value: String) -> Result<String, ConfigError> {
    match Url::parse(&value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(value),
        _ => Err(ConfigError::InvalidUrl {
            name: BASE_URL_VAR,
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.validation_status, 422);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn reads_all_variables() {
        let config = from_pairs(&[
            (BASE_URL_VAR, "http://localhost:8001"),
            (TIMEOUT_VAR, "3"),
            (VALIDATION_STATUS_VAR, "400"),
            (REPORT_PATH_VAR, "target/report.json"),
        ])
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8001");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.validation_status, 400);
        assert_eq!(config.report_path, Some(PathBuf::from("target/report.json")));
    }

    #[test]
    fn blank_values_use_defaults() {
        let config = from_pairs(&[(BASE_URL_VAR, "  "), (TIMEOUT_VAR, "")]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = from_pairs(&[(BASE_URL_VAR, "ftp://example.com")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidUrl {
                name: BASE_URL_VAR,
                value: "ftp://example.com".to_string()
            }
        );
        assert!(from_pairs(&[(BASE_URL_VAR, "not a url")]).is_err());
    }

    #[test]
    fn rejects_zero_or_garbage_timeout() {
        assert!(from_pairs(&[(TIMEOUT_VAR, "0")]).is_err());
        let err = from_pairs(&[(TIMEOUT_VAR, "ten")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "LEADPROBE_TIMEOUT_SECS must be a positive integer, got \"ten\""
        );
    }

    #[test]
    fn rejects_out_of_range_status() {
        assert!(from_pairs(&[(VALIDATION_STATUS_VAR, "42")]).is_err());
        assert!(from_pairs(&[(VALIDATION_STATUS_VAR, "700")]).is_err());
    }
}
