//! Item entity

use crate::codec;
use crate::value_objects::Price;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity: a row of the `items` table
///
/// ## Business Rules
///
/// - `id` is generated by the database and absent until the first save
/// - `name` is required
/// - `embedding`, when present, has the dimensionality of the storage schema;
///   a mismatch is reported by the database, not checked here
/// - `created_at` is set once on insert and never updated
///
/// ## Example
///
/// ```rust
/// use vsim_domain::{Item, Price};
///
/// let apple = Item::new("Apple", Some("Fruit"), Some(Price::from_cents(150)), Some(vec![1.0, 0.5, 0.2, 0.1]));
/// assert!(apple.id.is_none());
/// assert_eq!(apple.price.unwrap().to_string(), "1.50");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Database identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name
    pub name: String,
    /// Optional grouping key
    #[serde(default)]
    pub category: Option<String>,
    /// Optional fixed-point price
    #[serde(default)]
    pub price: Option<Price>,
    /// Fixed-length embedding vector
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
    /// Creation timestamp assigned by the database
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Item {
    /// Create an unsaved item
    pub fn new(
        name: impl Into<String>,
        category: Option<&str>,
        price: Option<Price>,
        embedding: Option<Vec<f32>>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: category.map(str::to_string),
            price,
            embedding,
            created_at: None,
        }
    }

    /// Whether the item has been stored
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let embedding = self
            .embedding
            .as_deref()
            .map_or_else(|| "null".to_string(), codec::format_rounded);
        write!(
            f,
            "{} (category: {}, price: {}, embedding: {})",
            self.name,
            self.category.as_deref().unwrap_or("-"),
            self.price.map_or_else(|| "-".to_string(), |p| p.to_string()),
            embedding
        )
    }
}
