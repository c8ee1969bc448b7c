use config::{Environment, File};
use log::warn;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

use crate::service::key::ServiceKey;

/// Prefix for environment overrides, e.g. `A_SYSTEM_SERVICE__KEY`.
pub const ENV_PREFIX: &str = "A_SYSTEM";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Shared secret the service is provisioned with
    #[serde(default)]
    pub key: Option<String>,
    /// Name the client presents to Hello and Auth
    pub client_name: String,
    /// Number of images uploaded per run
    pub images: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub service: ServiceSettings,
    pub log: LogConfig,
}

impl Settings {
    pub fn new(config_path: Option<&str>) -> Result<Self, SettingsError> {
        let mut config_builder = config::Config::builder()
            // Service defaults
            .set_default("service.client_name", "a-system")?
            .set_default("service.images", 2)?
            // Log defaults
            .set_default("log.level", "info")?;

        if let Some(path) = config_path {
            config_builder = config_builder.add_source(File::with_name(path));
        }

        // e.g. `A_SYSTEM_SERVICE__CLIENT_NAME=...` overrides `service.client_name`
        config_builder = config_builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .ignore_empty(true),
        );

        // Direct variables for the settings people reach for most
        let env_vars = [("SERVICE_KEY", "service.key"), ("LOG_LEVEL", "log.level")];
        for (env_var, config_path) in &env_vars {
            if let Ok(value) = env::var(env_var) {
                if value.is_empty() {
                    warn!("Ignoring empty {}", env_var);
                    continue;
                }
                config_builder = config_builder.set_override(*config_path, value)?;
            }
        }

        Ok(config_builder.build()?.try_deserialize()?)
    }

    /// The configured service key, or a freshly generated one when none is set.
    pub fn service_key(&self) -> ServiceKey {
        match self.service.key.as_deref() {
            Some(key) if !key.is_empty() => ServiceKey::new(key),
            _ => {
                warn!("No service key configured - generating a random key for this run");
                warn!("Set SERVICE_KEY or service.key to use a fixed key");
                ServiceKey::generate()
            }
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig { level: "info".to_string() }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            key: None,
            client_name: "a-system".to_string(),
            images: 2,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service: ServiceSettings::default(),
            log: LogConfig::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load or parse configuration: {0}")]
    LoadError(#[from] config::ConfigError),
}
