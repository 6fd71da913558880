//! Domain Entities
//!
//! Entities carry an identity assigned by the storage layer.

/// The item entity
pub mod item;

pub use item::Item;
