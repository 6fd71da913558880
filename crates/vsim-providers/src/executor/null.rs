//! Null query executor for testing
//!
//! Accepts every statement, returns no rows and reports zero affected rows.

use crate::constants::NULL_PROVIDER;
use async_trait::async_trait;
use tracing::trace;
use vsim_domain::error::Result;
use vsim_domain::ports::{QueryExecutor, ResultRow, Statement};

/// Null query executor
///
/// Useful for:
/// - Unit testing services without a database
/// - Dry runs of the CLI (`database.provider = "null"`)
#[derive(Debug, Clone, Default)]
pub struct NullQueryExecutor;

impl NullQueryExecutor {
    /// Create a new null executor
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QueryExecutor for NullQueryExecutor {
    async fn query(&self, statement: &Statement) -> Result<Vec<ResultRow>> {
        trace!(sql = %statement.sql, "Null executor query");
        Ok(Vec::new())
    }

    async fn execute(&self, statement: &Statement) -> Result<u64> {
        trace!(sql = %statement.sql, "Null executor execute");
        Ok(0)
    }

    fn provider_name(&self) -> &str {
        NULL_PROVIDER
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
