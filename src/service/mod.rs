// Publicly export key modules and types
pub mod error;
pub mod key;
pub mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::service::error::ServiceError;
use crate::types::{Image, ImageId, Timestamp};

/// Operations of the `a_system` service interface.
///
/// Operations that take a `key` are authenticated: they fail with
/// [`ServiceError::InvalidKey`] unless the key matches the service's current
/// secret.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Service: Send + Sync {
    /// Exchanges a client name and time for the service key.
    async fn auth(&self, name: &str, timestamp: Timestamp) -> Result<String, ServiceError>;

    async fn get_server_time(&self, key: &str) -> Result<Timestamp, ServiceError>;

    async fn hello(&self, name: &str) -> Result<String, ServiceError>;

    async fn noop(&self);

    /// Uploads an image and returns the id assigned to it.
    async fn post_image(&self, key: &str, image: &Image) -> Result<ImageId, ServiceError>;

    async fn get_image(&self, key: &str, id: ImageId) -> Result<Image, ServiceError>;

    /// Revokes the current service key.
    async fn reset(&self);
}

/// Names of the service operations, spelled as in the interface definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    Auth,
    GetServerTime,
    Hello,
    Noop,
    PostImage,
    GetImage,
    Reset,
}

impl Method {
    pub const ALL: [Method; 7] = [
        Method::Auth,
        Method::GetServerTime,
        Method::Hello,
        Method::Noop,
        Method::PostImage,
        Method::GetImage,
        Method::Reset,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Auth => "Auth",
            Method::GetServerTime => "GetServerTime",
            Method::Hello => "Hello",
            Method::Noop => "Noop",
            Method::PostImage => "PostImage",
            Method::GetImage => "GetImage",
            Method::Reset => "Reset",
        }
    }

    /// Whether the operation presents a service key.
    pub fn requires_key(&self) -> bool {
        matches!(
            self,
            Method::GetServerTime | Method::PostImage | Method::GetImage
        )
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
