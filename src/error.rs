use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not build http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write report to {}: {source}", path.display())]
    Report {
        path: PathBuf,
        source: std::io::Error,
    },
}
