//! Domain constants
//!
//! Table layout of the `items` table and search defaults shared by the
//! query builder, the row mapper and the CLI.

// ============================================================================
// TABLE LAYOUT
// ============================================================================

/// Table holding the items
pub const ITEMS_TABLE: &str = "items";

/// Dimensionality of the `embedding` column (`vector(4)`)
pub const EMBEDDING_DIMENSIONS: usize = 4;

/// Identifier column
pub const COL_ID: &str = "id";

/// Name column
pub const COL_NAME: &str = "name";

/// Category column
pub const COL_CATEGORY: &str = "category";

/// Price column (`NUMERIC(10,2)`)
pub const COL_PRICE: &str = "price";

/// Embedding column
pub const COL_EMBEDDING: &str = "embedding";

/// Creation timestamp column
pub const COL_CREATED_AT: &str = "created_at";

/// Computed single-metric distance column
pub const COL_DISTANCE: &str = "distance";

/// Computed count column of category statistics
pub const COL_ITEM_COUNT: &str = "item_count";

// ============================================================================
// SEARCH DEFAULTS
// ============================================================================

/// Default number of results for top-K searches
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Fractional digits carried by a price
pub const PRICE_SCALE: u32 = 2;
