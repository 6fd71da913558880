//! Application Service Port Interfaces

use async_trait::async_trait;
use vsim_domain::entities::Item;
use vsim_domain::error::Result;
use vsim_domain::value_objects::{
    CategoryCount, DistanceMetric, ItemWithAllDistances, ItemWithDistance, Price, SearchFilters,
};

// ============================================================================
// Similarity Service Interface
// ============================================================================

/// Vector Similarity Search Interface
///
/// Query vectors are given in their textual `"[v0,v1,...]"` form. Every
/// operation is one read-only round trip to storage and returns rows ordered
/// most-similar first.
///
/// # Errors
///
/// - [`Error::Parse`](vsim_domain::Error::Parse) when the query vector does not decode
/// - [`Error::InvalidArgument`](vsim_domain::Error::InvalidArgument) for a zero limit,
///   a non-finite threshold, an empty category, or inverted price bounds
/// - [`Error::Storage`](vsim_domain::Error::Storage) from the executor, unchanged
/// - [`Error::Mapping`](vsim_domain::Error::Mapping) when a returned row has an unexpected shape
#[async_trait]
pub trait SimilarityServiceInterface: Send + Sync {
    /// The `limit` items nearest to `query_vector`
    async fn find_similar(
        &self,
        metric: DistanceMetric,
        query_vector: &str,
        limit: usize,
    ) -> Result<Vec<Item>>;

    /// The `limit` items nearest to `query_vector`, with their distances
    async fn find_similar_with_distance(
        &self,
        metric: DistanceMetric,
        query_vector: &str,
        limit: usize,
    ) -> Result<Vec<ItemWithDistance>>;

    /// Every item whose distance is strictly below `threshold`
    ///
    /// The result is not capped; callers paginate if they need to.
    async fn find_within_threshold(
        &self,
        metric: DistanceMetric,
        query_vector: &str,
        threshold: f64,
    ) -> Result<Vec<ItemWithDistance>>;

    /// The `limit` nearest items passing `filters`
    async fn find_similar_filtered(
        &self,
        metric: DistanceMetric,
        query_vector: &str,
        limit: usize,
        filters: &SearchFilters,
    ) -> Result<Vec<Item>>;

    /// The `limit` items nearest by L2, with all four distances
    async fn compare_all_metrics(
        &self,
        query_vector: &str,
        limit: usize,
    ) -> Result<Vec<ItemWithAllDistances>>;
}

// ============================================================================
// Item Catalog Interface
// ============================================================================

/// Item storage operations outside similarity search
#[async_trait]
pub trait ItemCatalogInterface: Send + Sync {
    /// Create the pgvector extension and the items table if missing
    async fn ensure_schema(&self) -> Result<()>;

    /// Look up one item
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>>;

    /// Every item, ordered by name
    async fn find_all(&self) -> Result<Vec<Item>>;

    /// Items of one category, ordered by name
    async fn find_by_category(&self, category: &str) -> Result<Vec<Item>>;

    /// Items priced strictly below `max_price`, ordered by name
    async fn find_under_price(&self, max_price: Price) -> Result<Vec<Item>>;

    /// Item count per category, ordered by category
    async fn count_by_category(&self) -> Result<Vec<CategoryCount>>;

    /// Insert an unsaved item or update a stored one, returning the stored row
    async fn save(&self, item: &Item) -> Result<Item>;

    /// Delete one item, returning whether a row was removed
    async fn delete(&self, id: i64) -> Result<bool>;
}
