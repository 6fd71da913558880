//! Service composition
//!
//! Builds the query executor selected by `database.provider` and wires the
//! services over it. There is no container: every service receives the
//! shared executor through its constructor.

use crate::config::{AppConfig, DatabaseConfig};
use crate::error_ext::ErrorContext;
use std::sync::Arc;
use tracing::info;
use vsim_application::{
    ItemCatalogImpl, ItemCatalogInterface, SimilarityServiceImpl, SimilarityServiceInterface,
};
use vsim_domain::error::{Error, Result};
use vsim_domain::ports::QueryExecutor;
use vsim_providers::constants::{NULL_PROVIDER, POSTGRES_PROVIDER};
use vsim_providers::executor::{NullQueryExecutor, PostgresQueryExecutor};

/// Services sharing one executor
#[derive(Clone)]
pub struct Services {
    /// The storage executor
    pub executor: Arc<dyn QueryExecutor>,
    /// Similarity search
    pub similarity: Arc<dyn SimilarityServiceInterface>,
    /// Item lookups and upserts
    pub catalog: Arc<dyn ItemCatalogInterface>,
}

impl Services {
    /// Wire the services over an existing executor
    pub fn with_executor(executor: Arc<dyn QueryExecutor>) -> Self {
        Self {
            similarity: Arc::new(SimilarityServiceImpl::new(Arc::clone(&executor))),
            catalog: Arc::new(ItemCatalogImpl::new(Arc::clone(&executor))),
            executor,
        }
    }
}

/// Build the executor and services described by `config`
///
/// Pool creation blocks while the first connections open, so it runs on
/// tokio's blocking pool.
pub async fn build_services(config: &AppConfig) -> Result<Services> {
    let database = config.database.clone();
    let executor = tokio::task::spawn_blocking(move || build_executor(&database))
        .await
        .context("Executor setup task failed")??;

    info!(executor = executor.provider_name(), "Services ready");
    Ok(Services::with_executor(executor))
}

/// Build the executor named by `config.provider`
pub fn build_executor(config: &DatabaseConfig) -> Result<Arc<dyn QueryExecutor>> {
    match config.provider.as_str() {
        POSTGRES_PROVIDER => Ok(Arc::new(PostgresQueryExecutor::new(config)?)),
        NULL_PROVIDER => Ok(Arc::new(NullQueryExecutor::new())),
        other => Err(Error::config(format!("Unknown database.provider '{other}'"))),
    }
}
