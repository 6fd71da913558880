//! Application configuration root

use super::{LoggingConfig, SearchConfig};
use serde::{Deserialize, Serialize};
use validator::Validate;
use vsim_providers::executor::DatabaseConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// Storage connection and pool settings
    #[validate(nested)]
    pub database: DatabaseConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Defaults applied by the CLI when options are omitted
    #[validate(nested)]
    pub search: SearchConfig,
}
