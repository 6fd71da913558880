//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DATABASE_URL_ENV, DEFAULT_CONFIG_DIR,
    DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::Validate;
use vsim_domain::error::{Error, Result};
use vsim_providers::constants::{NULL_PROVIDER, POSTGRES_PROVIDER};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `VSIM_DATABASE__URL`)
    ///
    /// `DATABASE_URL` fills `database.url` when no source set it.
    pub fn load(&self) -> Result<AppConfig> {
        // Start with default configuration
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        // Add configuration file if specified
        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nested keys (e.g., VSIM_SEARCH__DEFAULT_LIMIT)
        figment = figment.merge(
            Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split(CONFIG_ENV_SEPARATOR),
        );

        let mut app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        if app_config.database.url.is_empty() {
            if let Ok(url) = env::var(DATABASE_URL_ENV) {
                debug!("Using {} for database.url", DATABASE_URL_ENV);
                app_config.database.url = url;
            }
        }

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Serialize configuration as TOML
    pub fn to_toml_string(config: &AppConfig) -> Result<String> {
        toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Field rules come from the `validator` derives; the cross-field checks
/// follow.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    config
        .validate()
        .config_context("Invalid configuration")?;
    validate_database_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_database_config(config: &AppConfig) -> Result<()> {
    let provider = config.database.provider.as_str();
    if provider != POSTGRES_PROVIDER && provider != NULL_PROVIDER {
        return Err(Error::config(format!(
            "Unknown database.provider '{provider}'. Use {POSTGRES_PROVIDER} or {NULL_PROVIDER}"
        )));
    }
    config.database.validate_pool()
}
