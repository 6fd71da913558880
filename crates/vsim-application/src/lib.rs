// Allow collapsible_if for nested filter validation
#![allow(clippy::collapsible_if)]

//! Application Layer - vsim
//!
//! Turns similarity requests into parameterized statements, runs them
//! through the [`QueryExecutor`](vsim_domain::ports::QueryExecutor) port, and
//! maps the returned rows back into domain values.
//!
//! ## Components
//!
//! - [`query`]: statement construction for similarity and catalog queries
//! - [`mapping`]: result row to domain value conversion
//! - [`use_cases`]: the similarity service and the item catalog
//! - [`ports`]: service interfaces exposed to callers
//!
//! ## Dependencies
//!
//! This crate depends only on `vsim-domain`; storage adapters are supplied
//! by the caller at construction time.

pub mod mapping;
pub mod ports;
pub mod query;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
