//! Library core for a-system.

// --- Modules ---
pub mod config;
pub mod error;
pub mod runner;
pub mod service;
pub mod types;

// Re-export key types for convenience
pub mod prelude {
    // Config
    pub use crate::config::Settings;
    pub use crate::error::AppError;

    // Service
    pub use crate::service::error::ServiceError;
    pub use crate::service::key::ServiceKey;
    pub use crate::service::mock::MockService;
    pub use crate::service::{Method, Service};
    pub use crate::types::{Image, ImageId, Timestamp};

    // Runner
    pub use crate::runner::{run, Outcome, RunRequest, Step, Transcript};

    // Common Libs
    pub use log::{debug, error, info, trace, warn};
    pub use std::sync::Arc;
}
