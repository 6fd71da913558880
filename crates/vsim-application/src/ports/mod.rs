//! Application Port Interfaces
//!
//! Service contracts exposed to callers (CLI, library users). The storage
//! port they consume lives in `vsim_domain::ports`.

/// Service interfaces
pub mod services;

pub use services::{ItemCatalogInterface, SimilarityServiceInterface};
pub use vsim_domain::ports::QueryExecutor;
