//! Tests for the null executor

use vsim_domain::ports::{QueryExecutor, Statement};
use vsim_providers::executor::NullQueryExecutor;

#[tokio::test]
async fn test_null_executor_returns_nothing() {
    let executor = NullQueryExecutor::new();
    let stmt = Statement::new("SELECT id FROM items WHERE id = $1").bind(1_i64);

    assert!(executor.query(&stmt).await.unwrap().is_empty());
    assert_eq!(executor.execute(&stmt).await.unwrap(), 0);
}

#[tokio::test]
async fn test_null_executor_is_healthy() {
    let executor = NullQueryExecutor::new();
    assert_eq!(executor.provider_name(), "null");
    assert!(executor.health_check().await.is_ok());
}
