use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ImageId;

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceError {
    #[error("invalid service key")]
    InvalidKey,

    #[error("image not found")]
    ImageNotFound { id: ImageId },
}

impl ServiceError {
    /// True when the error was caused by the caller's credentials rather than
    /// the request itself.
    pub fn is_auth(&self) -> bool {
        matches!(self, ServiceError::InvalidKey)
    }
}
