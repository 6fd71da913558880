//! # Domain Layer
//!
//! Core types for querying an `items` table augmented with fixed-length
//! embedding vectors. Nothing in this crate talks to a database; storage is
//! reached through the [`ports::QueryExecutor`] port.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | The [`Item`] entity |
//! | [`value_objects`] | Prices, query vectors, distance metrics, search results |
//! | [`codec`] | Textual `[v0,v1,...]` vector encoding |
//! | [`ports`] | Storage query port and its statement/row types |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Table layout and search defaults |

pub mod codec;
pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::Item;
pub use error::{Error, Result};
pub use value_objects::{
    CategoryCount, DistanceMetric, ItemWithAllDistances, ItemWithDistance, Price, QueryVector,
    SearchFilters,
};
