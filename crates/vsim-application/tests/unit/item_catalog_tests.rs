//! Tests for the item catalog over a scripted executor

use crate::test_utils::{APPLE, ScriptedExecutor, item_row};
use std::sync::Arc;
use vsim_application::{ItemCatalogImpl, ItemCatalogInterface};
use vsim_domain::error::Error;
use vsim_domain::ports::{ResultRow, SqlParam, SqlValue};
use vsim_domain::{Item, Price};

fn catalog(executor: &Arc<ScriptedExecutor>) -> ItemCatalogImpl {
    ItemCatalogImpl::new(executor.clone())
}

#[tokio::test]
async fn test_ensure_schema_runs_extension_then_table() {
    let executor = Arc::new(ScriptedExecutor::new());
    catalog(&executor).ensure_schema().await.unwrap();

    let statements = executor.statements();
    assert_eq!(statements.len(), 2);
    assert!(statements[0].sql.contains("CREATE EXTENSION"));
    assert!(statements[1].sql.contains("CREATE TABLE IF NOT EXISTS items"));
}

#[tokio::test]
async fn test_save_new_item_inserts() {
    let executor = Arc::new(ScriptedExecutor::returning(vec![item_row(
        1, "Apple", "Fruit", "1.50", APPLE,
    )]));
    let apple = Item::new(
        "Apple",
        Some("Fruit"),
        Some(Price::from_cents(150)),
        Some(vec![1.0, 0.5, 0.2, 0.1]),
    );

    let saved = catalog(&executor).save(&apple).await.unwrap();

    assert_eq!(saved.id, Some(1));
    assert!(saved.created_at.is_some());
    assert_eq!(saved.embedding, apple.embedding);
    let stmt = executor.last_statement();
    assert!(stmt.sql.starts_with("INSERT INTO items"));
    assert!(stmt.sql.contains("CAST($4 AS vector)"));
    assert_eq!(
        stmt.params[3],
        SqlParam::Vector(Some(vec![1.0, 0.5, 0.2, 0.1]))
    );
}

#[tokio::test]
async fn test_save_stored_item_updates() {
    let executor = Arc::new(ScriptedExecutor::returning(vec![item_row(
        1, "Green Apple", "Fruit", "1.75", APPLE,
    )]));
    let mut apple = Item::new("Green Apple", Some("Fruit"), Some(Price::from_cents(175)), None);
    apple.id = Some(1);

    let saved = catalog(&executor).save(&apple).await.unwrap();

    assert_eq!(saved.name, "Green Apple");
    let stmt = executor.last_statement();
    assert!(stmt.sql.starts_with("UPDATE items"));
    assert_eq!(stmt.params[4], SqlParam::Int(1));
}

#[tokio::test]
async fn test_update_of_missing_item_is_not_found() {
    let executor = Arc::new(ScriptedExecutor::new());
    let mut ghost = Item::new("Ghost", None, None, None);
    ghost.id = Some(404);

    let err = catalog(&executor).save(&ghost).await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_save_rejects_blank_name() {
    let executor = Arc::new(ScriptedExecutor::new());
    let err = catalog(&executor)
        .save(&Item::new(" ", None, None, None))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(executor.statements().is_empty());
}

#[tokio::test]
async fn test_find_by_id() {
    let executor = Arc::new(ScriptedExecutor::returning(vec![item_row(
        1, "Apple", "Fruit", "1.50", APPLE,
    )]));
    executor.push_rows(Vec::new());
    let catalog = catalog(&executor);

    assert_eq!(catalog.find_by_id(1).await.unwrap().unwrap().name, "Apple");
    assert!(catalog.find_by_id(2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_category_binds_category() {
    let executor = Arc::new(ScriptedExecutor::returning(vec![item_row(
        1, "Apple", "Fruit", "1.50", APPLE,
    )]));

    let items = catalog(&executor).find_by_category("Fruit").await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        executor.last_statement().params,
        vec![SqlParam::Text("Fruit".to_string())]
    );
}

#[tokio::test]
async fn test_find_under_price_is_strict_and_ordered_by_name() {
    let executor = Arc::new(ScriptedExecutor::returning(vec![item_row(
        1, "Apple", "Fruit", "1.50", APPLE,
    )]));

    let items = catalog(&executor)
        .find_under_price(Price::from_cents(500))
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].price, Some(Price::from_cents(150)));
    let stmt = executor.last_statement();
    assert!(stmt.sql.contains("WHERE price < CAST($1::text AS numeric)"));
    assert!(stmt.sql.ends_with("ORDER BY name"));
    assert!(!stmt.sql.contains("<->"));
    assert_eq!(stmt.params, vec![SqlParam::Text("5.00".to_string())]);
}

#[tokio::test]
async fn test_count_by_category() {
    let executor = Arc::new(ScriptedExecutor::returning(vec![
        ResultRow::new()
            .with("category", SqlValue::Text("Fruit".to_string()))
            .with("item_count", SqlValue::Int(2)),
        ResultRow::new()
            .with("category", SqlValue::Text("Meat".to_string()))
            .with("item_count", SqlValue::Int(1)),
    ]));

    let counts = catalog(&executor).count_by_category().await.unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].count, 2);
    assert_eq!(counts[1].category.as_deref(), Some("Meat"));
}

#[tokio::test]
async fn test_delete_reports_whether_a_row_was_removed() {
    let executor = Arc::new(ScriptedExecutor::new());
    executor.push_affected(1);
    executor.push_affected(0);
    let catalog = catalog(&executor);

    assert!(catalog.delete(1).await.unwrap());
    assert!(!catalog.delete(1).await.unwrap());
}
