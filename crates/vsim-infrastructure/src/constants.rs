//! Infrastructure Constants

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Prefix of configuration environment variables (`VSIM_DATABASE__URL`)
pub const CONFIG_ENV_PREFIX: &str = "VSIM";

/// Separator between nested keys in configuration environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Conventional connection string variable, used when `database.url` is unset
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "vsim.toml";

/// Configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "vsim";

// ============================================================================
// LOGGING
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "VSIM_LOG";

/// File name prefix of rotated log files
pub const LOG_FILE_PREFIX: &str = "vsim";

// ============================================================================
// SEARCH
// ============================================================================

/// Largest accepted `search.default_limit`
pub const MAX_SEARCH_LIMIT: usize = 1000;
