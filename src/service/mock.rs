// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mock Service
//!
//! Deterministic stand-in for a real [`Service`] backend. Results are
//! canned: the server time is always [`Timestamp::ZERO`], uploaded images
//! are discarded and every lookup of a nonzero id returns an empty image.

use async_trait::async_trait;
use log::{debug, info};
use tokio::sync::Mutex as TokioMutex;

use crate::service::error::ServiceError;
use crate::service::key::ServiceKey;
use crate::service::Service;
use crate::types::{Image, ImageId, Timestamp};

/// Greeting prefix returned by `hello`.
pub const GREETING_PREFIX: &str = "Good to go ";

#[derive(Debug)]
struct MockState {
    key: ServiceKey,
    last_id: u64,
}

#[derive(Debug)]
pub struct MockService {
    state: TokioMutex<MockState>,
}

impl MockService {
    pub fn new(key: impl Into<ServiceKey>) -> Self {
        Self {
            state: TokioMutex::new(MockState {
                key: key.into(),
                last_id: 0,
            }),
        }
    }

    /// Install a new key, e.g. after `reset`. The id counter is kept.
    pub async fn provision(&self, key: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.key.provision(key);
    }

    /// Number of ids issued so far.
    pub async fn posted(&self) -> u64 {
        self.state.lock().await.last_id
    }

    pub async fn is_provisioned(&self) -> bool {
        self.state.lock().await.key.is_provisioned()
    }
}

#[async_trait]
impl Service for MockService {
    async fn auth(&self, name: &str, _timestamp: Timestamp) -> Result<String, ServiceError> {
        debug!("Auth requested by {:?}", name);
        let state = self.state.lock().await;
        Ok(state.key.as_str().to_string())
    }

    async fn get_server_time(&self, key: &str) -> Result<Timestamp, ServiceError> {
        let state = self.state.lock().await;
        state.key.check(key)?;
        Ok(Timestamp::ZERO)
    }

    async fn hello(&self, name: &str) -> Result<String, ServiceError> {
        Ok(format!("{}{}", GREETING_PREFIX, name))
    }

    async fn noop(&self) {}

    async fn post_image(&self, key: &str, image: &Image) -> Result<ImageId, ServiceError> {
        let mut state = self.state.lock().await;
        state.key.check(key)?;
        state.last_id += 1;
        debug!("Accepted image of {} bytes as id {}", image.len(), state.last_id);
        Ok(ImageId::from(state.last_id))
    }

    async fn get_image(&self, key: &str, id: ImageId) -> Result<Image, ServiceError> {
        let state = self.state.lock().await;
        state.key.check(key)?;
        if id.is_none() {
            return Err(ServiceError::ImageNotFound { id });
        }
        Ok(Image::default())
    }

    async fn reset(&self) {
        let mut state = self.state.lock().await;
        state.key.clear();
        info!("Mock service reset");
    }
}
