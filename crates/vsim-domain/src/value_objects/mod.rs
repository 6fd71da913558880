//! Domain Value Objects
//!
//! Immutable values defined by their attributes.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Price`] | Fixed-point `NUMERIC(10,2)` amount |
//! | [`QueryVector`] | Finite-valued search input |
//! | [`DistanceMetric`] | L2, cosine, inner product or L1 operator |
//! | [`ItemWithDistance`] | Item plus one computed distance |
//! | [`ItemWithAllDistances`] | Item plus all four distances |
//! | [`SearchFilters`] | Category and price restrictions |
//! | [`CategoryCount`] | Items per category |

/// Distance metric value objects
pub mod metric;
/// Fixed-point price value object
pub mod price;
/// Search result and filter value objects
pub mod search;
/// Query vector value object
pub mod vector;

pub use metric::DistanceMetric;
pub use price::Price;
pub use search::{CategoryCount, ItemWithAllDistances, ItemWithDistance, SearchFilters};
pub use vector::QueryVector;
