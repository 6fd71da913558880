//! Domain Port Interfaces
//!
//! Traits implemented by outer layers. Storage adapters live in
//! `vsim-providers`.

/// Storage query port
pub mod storage;

pub use storage::{QueryExecutor, ResultRow, SqlParam, SqlValue, Statement};
