//! Search-Related Value Objects
//!
//! Results of similarity queries and the optional filters narrowing them.
//! Results are produced only by mapping returned rows; they are never
//! persisted or cached.

use crate::entities::Item;
use crate::value_objects::Price;
use serde::{Deserialize, Serialize};

/// Value Object: Item paired with its distance to the query vector
///
/// Smaller distances are more similar for every metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemWithDistance {
    /// The matched item
    pub item: Item,
    /// Distance under the requested metric
    pub distance: f64,
}

/// Value Object: Item with all four distances to the query vector
///
/// Produced by the multi-metric comparison, which orders rows by `l2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemWithAllDistances {
    /// The matched item
    pub item: Item,
    /// Euclidean distance
    pub l2: f64,
    /// Cosine distance
    pub cosine: f64,
    /// Negated inner product
    pub neg_inner_product: f64,
    /// Manhattan distance
    pub l1: f64,
}

/// Value Object: Optional filters for a similarity search
///
/// | Fields set | Condition |
/// |------------|-----------|
/// | `category` | `category = ?` |
/// | `max_price` only | `price < ?` |
/// | `min_price` only | `price >= ?` |
/// | both prices | `price BETWEEN ? AND ?` (inclusive) |
///
/// ## Example
///
/// ```rust
/// use vsim_domain::SearchFilters;
///
/// let filters = SearchFilters::default().with_category("Vegetable");
/// assert_eq!(filters.category.as_deref(), Some("Vegetable"));
/// assert!(!filters.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Category equality
    #[serde(default)]
    pub category: Option<String>,
    /// Lower price bound
    #[serde(default)]
    pub min_price: Option<Price>,
    /// Upper price bound
    #[serde(default)]
    pub max_price: Option<Price>,
}

impl SearchFilters {
    /// Restrict to a category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the lower price bound
    #[must_use]
    pub fn with_min_price(mut self, price: Price) -> Self {
        self.min_price = Some(price);
        self
    }

    /// Set the upper price bound
    #[must_use]
    pub fn with_max_price(mut self, price: Price) -> Self {
        self.max_price = Some(price);
        self
    }

    /// Whether no filter is set
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.min_price.is_none() && self.max_price.is_none()
    }
}

/// Value Object: Number of items per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category, `None` for uncategorized items
    pub category: Option<String>,
    /// Number of items
    pub count: i64,
}
