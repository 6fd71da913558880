//! Use Case Implementations

/// Item lookups, statistics and upserts
pub mod item_catalog;
/// Vector similarity search
pub mod similarity_service;

pub use item_catalog::ItemCatalogImpl;
pub use similarity_service::SimilarityServiceImpl;
