use thiserror::Error;

use crate::config::SettingsError;
use crate::service::error::ServiceError;

/// Top-level error of the `a-system` binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Settings(#[from] SettingsError),
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
