//! Configuration management for Folio

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Transactional email delivery identifiers. Optional: the portfolio
    /// renders without them, but contact submissions will fail.
    pub delivery: Option<DeliveryConfig>,

    /// Path to a portfolio content file overriding the built-in content.
    pub content_path: Option<String>,
}

/// Opaque identifiers for the third-party email delivery service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Override for the delivery endpoint (defaults to the EmailJS REST API)
    pub endpoint: Option<String>,
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing config file is not an error: the delivery identifiers can
    /// still come from the environment, and an absent delivery section only
    /// surfaces once the user actually submits the contact form.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        let mut config = if config_path.exists() {
            Self::load_from_path(&config_path)?
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Self::default()
        };
        config.apply_env_overrides();

        if config.delivery.is_none() {
            tracing::warn!(
                "delivery service identifiers are missing; contact submissions will fail"
            );
        }

        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Overlay delivery identifiers from the environment
    ///
    /// `FOLIO_EMAIL_SERVICE_ID`, `FOLIO_EMAIL_TEMPLATE_ID`, and
    /// `FOLIO_EMAIL_PUBLIC_KEY` together form a complete delivery config;
    /// partial sets are ignored.
    pub fn apply_env_overrides(&mut self) {
        let service_id = std::env::var("FOLIO_EMAIL_SERVICE_ID").ok();
        let template_id = std::env::var("FOLIO_EMAIL_TEMPLATE_ID").ok();
        let public_key = std::env::var("FOLIO_EMAIL_PUBLIC_KEY").ok();

        if let (Some(service_id), Some(template_id), Some(public_key)) =
            (service_id, template_id, public_key)
        {
            self.delivery = Some(DeliveryConfig {
                service_id,
                template_id,
                public_key,
                endpoint: std::env::var("FOLIO_EMAIL_ENDPOINT").ok().or_else(|| {
                    self.delivery.as_ref().and_then(|d| d.endpoint.clone())
                }),
            });
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("FOLIO_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("folio").join("config.toml"))
}

/// Resolve the data directory path (log files live here)
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("folio"))
}
