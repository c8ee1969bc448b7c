// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Drives a [`Service`] through a fixed session and records each call.
//!
//! The session is: Hello, Auth, Noop, GetServerTime, a number of PostImage
//! uploads, GetImage for the reserved id (expected to fail), GetImage for
//! the first uploaded id, Reset, and finally GetServerTime with the revoked
//! key (expected to fail).

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::service::error::ServiceError;
use crate::service::{Method, Service};
use crate::types::{Image, ImageId, Timestamp};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    /// Client name passed to Hello and Auth
    pub name: String,
    /// Number of PostImage calls
    pub images: u32,
}

impl Default for RunRequest {
    fn default() -> Self {
        Self {
            name: "a-system".to_string(),
            images: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Ok { detail: String },
    Failed { error: ServiceError },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub method: Method,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    pub steps: Vec<Step>,
    pub image_ids: Vec<ImageId>,
    pub server_time: Option<Timestamp>,
    /// True when the key stopped working after Reset.
    pub key_revoked: bool,
}

impl Transcript {
    fn ok(&mut self, method: Method, detail: impl Into<String>) {
        let detail = detail.into();
        debug!("{}{} -> ok: {}", method, keyed_marker(method), detail);
        self.steps.push(Step {
            method,
            outcome: Outcome::Ok { detail },
        });
    }

    fn failed(&mut self, method: Method, error: ServiceError) {
        debug!("{}{} -> failed: {}", method, keyed_marker(method), error);
        self.steps.push(Step {
            method,
            outcome: Outcome::Failed { error },
        });
    }

    pub fn failures(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step.outcome, Outcome::Failed { .. }))
            .count()
    }
}

fn keyed_marker(method: Method) -> &'static str {
    if method.requires_key() {
        " (keyed)"
    } else {
        ""
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            match &step.outcome {
                Outcome::Ok { detail } => writeln!(f, "{:<14} ok      {}", step.method, detail)?,
                Outcome::Failed { error } => writeln!(f, "{:<14} failed  {}", step.method, error)?,
            }
        }
        write!(
            f,
            "{} calls, {} images, key revoked: {}",
            self.steps.len(),
            self.image_ids.len(),
            self.key_revoked
        )
    }
}

/// Run the session against `service`.
///
/// Failures the session expects (GetImage of [`ImageId::NONE`] reporting
/// `ImageNotFound`, GetServerTime after Reset reporting `InvalidKey`) are
/// recorded in the transcript. Any other error aborts the run.
pub async fn run<S>(service: &S, request: &RunRequest) -> Result<Transcript, ServiceError>
where
    S: Service + ?Sized,
{
    let mut transcript = Transcript::default();
    info!("Running service session for {:?}", request.name);

    let greeting = service.hello(&request.name).await?;
    transcript.ok(Method::Hello, greeting);

    let key = service.auth(&request.name, Timestamp::now()).await?;
    transcript.ok(Method::Auth, "key issued");

    service.noop().await;
    transcript.ok(Method::Noop, "");

    let now = service.get_server_time(&key).await?;
    transcript.server_time = Some(now);
    transcript.ok(Method::GetServerTime, now.to_string());

    for _ in 0..request.images {
        let id = service.post_image(&key, &Image::default()).await?;
        transcript.image_ids.push(id);
        transcript.ok(Method::PostImage, format!("id {}", id));
    }

    match service.get_image(&key, ImageId::NONE).await {
        Ok(image) => {
            warn!("GetImage returned an image for the reserved id");
            let detail = format!("id {}: {} bytes", ImageId::NONE, image.len());
            transcript.ok(Method::GetImage, detail);
        }
        Err(error @ ServiceError::ImageNotFound { .. }) => {
            transcript.failed(Method::GetImage, error)
        }
        Err(error) => return Err(error),
    }

    if let Some(&first) = transcript.image_ids.first() {
        let image = service.get_image(&key, first).await?;
        transcript.ok(Method::GetImage, format!("id {}: {} bytes", first, image.len()));
    }

    service.reset().await;
    transcript.ok(Method::Reset, "");

    match service.get_server_time(&key).await {
        Ok(now) => {
            warn!("Service key still accepted after Reset");
            transcript.ok(Method::GetServerTime, now.to_string());
        }
        Err(error) if error.is_auth() => {
            transcript.key_revoked = true;
            transcript.failed(Method::GetServerTime, error);
        }
        Err(error) => return Err(error),
    }

    info!(
        "Session finished: {} calls, {} images posted, {} expected failures",
        transcript.steps.len(),
        transcript.image_ids.len(),
        transcript.failures()
    );
    Ok(transcript)
}
