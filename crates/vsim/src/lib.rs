//! # vsim
//!
//! Nearest-neighbour queries over a PostgreSQL `items` table with a pgvector
//! `vector(4)` embedding column, under four distance metrics.
//!
//! ## Example
//!
//! ```ignore
//! use vsim::infrastructure::{ConfigLoader, build_services};
//! use vsim::DistanceMetric;
//!
//! let config = ConfigLoader::new().load()?;
//! let services = build_services(&config).await?;
//! let nearest = services
//!     .similarity
//!     .find_similar(DistanceMetric::Cosine, "[1.0,0.5,0.2,0.1]", 3)
//!     .await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Items, value objects, vector codec, errors, storage port
//! - `application` - Query builder, row mapper, similarity and catalog services
//! - `providers` - PostgreSQL and null query executors
//! - `infrastructure` - Configuration, logging, health, composition
//! - `cli` - The `vsim` command line

/// Domain layer - core types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use vsim_domain::*;
}

/// Application layer - query building and services
pub mod application {
    pub use vsim_application::*;
}

/// Providers - query executors
pub mod providers {
    pub use vsim_providers::*;
}

/// Infrastructure layer - config, logging and composition
pub mod infrastructure {
    pub use vsim_infrastructure::*;
}

/// Command line interface
pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the services at the crate root
pub use application::{
    ItemCatalogInterface, SimilarityServiceImpl, SimilarityServiceInterface,
};
