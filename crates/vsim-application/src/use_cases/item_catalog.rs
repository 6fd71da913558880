//! Item Catalog Use Case
//!
//! Plain lookups, category statistics and upserts on the items table.

use crate::mapping::{map_category_count, map_item, map_rows};
use crate::ports::services::ItemCatalogInterface;
use crate::query::catalog;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};
use vsim_domain::entities::Item;
use vsim_domain::error::{Error, Result};
use vsim_domain::ports::QueryExecutor;
use vsim_domain::value_objects::{CategoryCount, Price};

/// Item catalog implementation
pub struct ItemCatalogImpl {
    executor: Arc<dyn QueryExecutor>,
}

impl ItemCatalogImpl {
    /// Create the catalog over an executor
    pub fn new(executor: Arc<dyn QueryExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl ItemCatalogInterface for ItemCatalogImpl {
    async fn ensure_schema(&self) -> Result<()> {
        for statement in catalog::create_schema() {
            self.executor.execute(&statement).await?;
        }
        info!(executor = self.executor.provider_name(), "Items schema ready");
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>> {
        let rows = self.executor.query(&catalog::find_by_id(id)).await?;
        rows.first().map(map_item).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Item>> {
        let rows = self.executor.query(&catalog::find_all()).await?;
        map_rows(&rows, map_item)
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Item>> {
        let rows = self
            .executor
            .query(&catalog::find_by_category(category))
            .await?;
        map_rows(&rows, map_item)
    }

    async fn find_under_price(&self, max_price: Price) -> Result<Vec<Item>> {
        let rows = self
            .executor
            .query(&catalog::find_under_price(max_price))
            .await?;
        map_rows(&rows, map_item)
    }

    async fn count_by_category(&self) -> Result<Vec<CategoryCount>> {
        let rows = self.executor.query(&catalog::count_by_category()).await?;
        map_rows(&rows, map_category_count)
    }

    async fn save(&self, item: &Item) -> Result<Item> {
        if item.name.trim().is_empty() {
            return Err(Error::invalid_argument("item name must not be empty"));
        }

        let statement = match item.id {
            Some(id) => catalog::update(id, item),
            None => catalog::insert(item),
        };
        let rows = self.executor.query(&statement).await?;

        let saved = match (rows.first(), item.id) {
            (Some(row), _) => map_item(row)?,
            (None, Some(id)) => return Err(Error::not_found(format!("item {id}"))),
            (None, None) => return Err(Error::storage("insert returned no row")),
        };
        debug!(id = ?saved.id, name = %saved.name, "Item saved");
        Ok(saved)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let affected = self.executor.execute(&catalog::delete(id)).await?;
        debug!(id, affected, "Item delete");
        Ok(affected > 0)
    }
}
