//! Statement Construction
//!
//! Builds every statement the services send to the executor. All values are
//! bound parameters; the only text interpolated into SQL is table layout
//! from `vsim_domain::constants` and operators from
//! [`DistanceMetric`](vsim_domain::DistanceMetric)'s static table.
//!
//! Vectors are bound as native pgvector values behind one canonical cast,
//! `CAST($n AS vector)`. Decimals travel as text and are cast with
//! `CAST($n::text AS numeric)`.

/// Item catalog statements (lookup, stats, save, delete, schema)
pub mod catalog;
/// Similarity statement builder
pub mod similarity;

pub use similarity::{PriceFilter, Projection, ResultBound, SimilarityQuery};

/// Item columns as the row mapper expects them
///
/// `price` is read back as text and parsed in-process.
pub const ITEM_SELECT_LIST: &str =
    "id, name, category, price::text AS price, embedding, created_at";

pub(crate) fn vector_param(n: usize) -> String {
    format!("CAST(${n} AS vector)")
}

pub(crate) fn numeric_param(n: usize) -> String {
    format!("CAST(${n}::text AS numeric)")
}
