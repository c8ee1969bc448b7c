// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Service Key Guard
//!
//! Every authenticated operation presents a token that must match the
//! service's shared secret. [`ServiceKey::check`] is the single place that
//! comparison happens.

use log::{debug, info, warn};
use std::fmt;
use uuid::Uuid;

use crate::service::error::ServiceError;

/// Prefix of keys produced by [`ServiceKey::generate`].
pub const GENERATED_KEY_PREFIX: &str = "ask_";

/// Shared secret guarding a service instance.
///
/// A token is accepted exactly when it equals the key. After
/// [`ServiceKey::clear`] the key is empty, so only the empty token passes.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ServiceKey(String);

impl ServiceKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Generate a fresh random key
    pub fn generate() -> Self {
        let key = format!("{}{}", GENERATED_KEY_PREFIX, Uuid::new_v4().simple());
        info!("Generated new service key");
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_provisioned(&self) -> bool {
        !self.0.is_empty()
    }

    /// Validate a caller-supplied token against the key.
    pub fn check(&self, token: &str) -> Result<(), ServiceError> {
        if token != self.0 {
            warn!("Invalid service key presented");
            return Err(ServiceError::InvalidKey);
        }
        debug!("Service key accepted");
        Ok(())
    }

    /// Drop the secret. Every non-empty token fails until [`ServiceKey::provision`].
    pub fn clear(&mut self) {
        self.0.clear();
        info!("Service key cleared");
    }

    pub fn provision(&mut self, key: impl Into<String>) {
        self.0 = key.into();
        if self.is_provisioned() {
            info!("Service key provisioned");
        } else {
            warn!("Service key provisioned empty; the empty token will be accepted");
        }
    }
}

impl From<&str> for ServiceKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ServiceKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

// Never print the secret itself.
impl fmt::Debug for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceKey")
            .field("provisioned", &self.is_provisioned())
            .finish()
    }
}
