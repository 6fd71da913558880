// Allow collapsible_if for nested pool teardown checks
#![allow(clippy::collapsible_if)]

//! # vsim - Provider Implementations
//!
//! Storage adapters implementing the `QueryExecutor` port defined in
//! `vsim-domain`.
//!
//! | Provider | Backend | Use |
//! |----------|---------|-----|
//! | `PostgresQueryExecutor` | PostgreSQL + pgvector via an r2d2 pool | Production |
//! | `NullQueryExecutor` | none | Tests and dry runs |
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use vsim_providers::executor::{DatabaseConfig, PostgresQueryExecutor};
//!
//! let config = DatabaseConfig::with_url("postgres://localhost/vsim");
//! let executor = Arc::new(PostgresQueryExecutor::new(&config)?);
//! ```

// Re-export vsim-domain types commonly used with providers
pub use vsim_domain::error::{Error, Result};
pub use vsim_domain::ports::QueryExecutor;

/// Provider-specific constants
pub mod constants;

/// Query executor implementations
///
/// Implements `QueryExecutor` for storage backends.
pub mod executor;
