//! Provider Constants
//!
//! Defaults for the PostgreSQL connection pool. Overridable through the
//! `database` configuration section.

use std::time::Duration;

/// Provider name reported by the PostgreSQL executor
pub const POSTGRES_PROVIDER: &str = "postgres";

/// Provider name reported by the null executor
pub const NULL_PROVIDER: &str = "null";

/// Maximum pooled connections
pub const DB_MAX_CONNECTIONS: u32 = 10;

/// Minimum idle connections kept open
pub const DB_MIN_IDLE: u32 = 1;

/// Connection lifetime before recycling
pub const DB_CONNECTION_MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Idle time before a connection is closed
pub const DB_CONNECTION_IDLE_TIMEOUT: Duration = Duration::from_secs(600);

/// Time to wait for a connection from the pool
pub const DB_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);
