//! Similarity Service Use Case
//!
//! Combines the statement builder and the row mapper into the named
//! similarity operations. Holds nothing but its executor handle, so
//! concurrent callers never share mutable state.

use crate::mapping::{map_item, map_item_with_all_distances, map_item_with_distance, map_rows};
use crate::ports::services::SimilarityServiceInterface;
use crate::query::SimilarityQuery;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use vsim_domain::entities::Item;
use vsim_domain::error::Result;
use vsim_domain::ports::{QueryExecutor, ResultRow};
use vsim_domain::value_objects::{
    DistanceMetric, ItemWithAllDistances, ItemWithDistance, QueryVector, SearchFilters,
};

/// Similarity service implementation
pub struct SimilarityServiceImpl {
    executor: Arc<dyn QueryExecutor>,
}

impl SimilarityServiceImpl {
    /// Create the service over an executor
    pub fn new(executor: Arc<dyn QueryExecutor>) -> Self {
        Self { executor }
    }

    /// Run an arbitrary similarity query for an already-parsed vector
    ///
    /// Entry point for callers holding numeric vectors. `mapper` is one of
    /// the [`crate::mapping`] functions matching the query's projection; the
    /// textual operations of [`SimilarityServiceInterface`] parse and
    /// delegate here.
    pub async fn run<T>(
        &self,
        query: &SimilarityQuery,
        vector: &QueryVector,
        mapper: fn(&ResultRow) -> Result<T>,
    ) -> Result<Vec<T>> {
        let statement = query.build(vector)?;
        debug!(
            executor = self.executor.provider_name(),
            metric = %query.metric(),
            vector = %vector.to_display_string(),
            params = statement.params.len(),
            "Running similarity query"
        );
        let rows = self.executor.query(&statement).await?;
        debug!(rows = rows.len(), "Similarity query returned");
        map_rows(&rows, mapper)
    }

    async fn run_text<T>(
        &self,
        query: &SimilarityQuery,
        query_vector: &str,
        mapper: fn(&ResultRow) -> Result<T>,
    ) -> Result<Vec<T>> {
        let vector = QueryVector::parse(query_vector)?;
        self.run(query, &vector, mapper).await
    }
}

#[async_trait]
impl SimilarityServiceInterface for SimilarityServiceImpl {
    async fn find_similar(
        &self,
        metric: DistanceMetric,
        query_vector: &str,
        limit: usize,
    ) -> Result<Vec<Item>> {
        self.run_text(&SimilarityQuery::top_k(metric, limit), query_vector, map_item)
            .await
    }

    async fn find_similar_with_distance(
        &self,
        metric: DistanceMetric,
        query_vector: &str,
        limit: usize,
    ) -> Result<Vec<ItemWithDistance>> {
        self.run_text(
            &SimilarityQuery::top_k(metric, limit),
            query_vector,
            map_item_with_distance,
        )
        .await
    }

    async fn find_within_threshold(
        &self,
        metric: DistanceMetric,
        query_vector: &str,
        threshold: f64,
    ) -> Result<Vec<ItemWithDistance>> {
        self.run_text(
            &SimilarityQuery::within_threshold(metric, threshold),
            query_vector,
            map_item_with_distance,
        )
        .await
    }

    async fn find_similar_filtered(
        &self,
        metric: DistanceMetric,
        query_vector: &str,
        limit: usize,
        filters: &SearchFilters,
    ) -> Result<Vec<Item>> {
        let query = SimilarityQuery::top_k(metric, limit).with_filters(filters)?;
        self.run_text(&query, query_vector, map_item).await
    }

    async fn compare_all_metrics(
        &self,
        query_vector: &str,
        limit: usize,
    ) -> Result<Vec<ItemWithAllDistances>> {
        self.run_text(
            &SimilarityQuery::compare_all(limit),
            query_vector,
            map_item_with_all_distances,
        )
        .await
    }
}
