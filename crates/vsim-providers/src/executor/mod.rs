//! Query Executor Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | PostgresQueryExecutor | Production | Pooled `postgres` connections, run on tokio's blocking pool |
//! | NullQueryExecutor | Testing | Returns no rows and affects nothing |

pub mod null;
pub mod postgres;

pub use null::NullQueryExecutor;
pub use self::postgres::{DatabaseConfig, PostgresQueryExecutor};
