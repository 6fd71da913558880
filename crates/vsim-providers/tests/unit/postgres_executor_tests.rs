//! PostgreSQL executor tests against a live database

use vsim_domain::error::Error;
use vsim_domain::ports::{QueryExecutor, SqlParam, SqlValue, Statement};
use vsim_providers::executor::{DatabaseConfig, PostgresQueryExecutor};

/// Single-connection executor, so temporary tables outlive one call
fn executor() -> Option<PostgresQueryExecutor> {
    let url = std::env::var("VSIM_TEST_DATABASE_URL").ok()?;
    let mut config = DatabaseConfig::with_url(url);
    config.max_connections = 1;
    config.min_idle = 1;
    Some(PostgresQueryExecutor::new(&config).expect("test database should be reachable"))
}

#[tokio::test]
async fn test_health_check() {
    let Some(executor) = executor() else {
        return;
    };
    executor.health_check().await.unwrap();
    assert_eq!(executor.provider_name(), "postgres");
}

#[tokio::test]
async fn test_vector_binds_and_reads_natively() {
    let Some(executor) = executor() else {
        return;
    };
    executor
        .execute(&Statement::new("CREATE EXTENSION IF NOT EXISTS vector"))
        .await
        .unwrap();

    let stmt = Statement::new(
        "SELECT CAST($1 AS vector) AS embedding, CAST($2 AS vector) AS missing,
                CAST($1 AS vector) <-> CAST($1 AS vector) AS distance",
    )
    .bind(SqlParam::Vector(Some(vec![1.0, 0.5, 0.2, 0.1])))
    .bind(SqlParam::Vector(None));

    let rows = executor.query(&stmt).await.unwrap();
    let row = &rows[0];
    assert_eq!(
        row.get("embedding").unwrap(),
        &SqlValue::Vector(vec![1.0, 0.5, 0.2, 0.1])
    );
    assert_eq!(row.get("missing").unwrap(), &SqlValue::Null);
    assert!(row.get_f64("distance").unwrap().abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_column_types_round_trip() {
    let Some(executor) = executor() else {
        return;
    };

    let stmt = Statement::new(
        "SELECT $1::int8 AS big, 7::int4 AS small, $2::float8 AS ratio, $3::text AS label,
                $4::text AS missing, TRUE AS flag, TIMESTAMP '2024-01-15 10:30:00' AS stamp",
    )
    .bind(42_i64)
    .bind(0.25_f64)
    .bind("apple")
    .bind(SqlParam::Null);

    let rows = executor.query(&stmt).await.unwrap();
    let row = &rows[0];
    assert_eq!(row.get_i64("big").unwrap(), 42);
    assert_eq!(row.get_i64("small").unwrap(), 7);
    assert!((row.get_f64("ratio").unwrap() - 0.25).abs() < f64::EPSILON);
    assert_eq!(row.get_str("label").unwrap(), "apple");
    assert_eq!(row.get("missing").unwrap(), &SqlValue::Null);
    assert_eq!(row.get("flag").unwrap(), &SqlValue::Bool(true));
    assert!(row.get_opt_timestamp("stamp").unwrap().is_some());
}

#[tokio::test]
async fn test_unsupported_column_type_is_mapping_error() {
    let Some(executor) = executor() else {
        return;
    };
    let err = executor
        .query(&Statement::new("SELECT 1.50::numeric AS price"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Mapping { .. }));
}

#[tokio::test]
async fn test_engine_failure_is_storage_error() {
    let Some(executor) = executor() else {
        return;
    };
    let err = executor
        .query(&Statement::new("SELECT * FROM vsim_table_that_does_not_exist"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Storage { .. }));
}

#[tokio::test]
async fn test_execute_reports_affected_rows() {
    let Some(executor) = executor() else {
        return;
    };
    executor
        .execute(&Statement::new(
            "CREATE TEMPORARY TABLE IF NOT EXISTS vsim_affected (id int8)",
        ))
        .await
        .unwrap();
    executor
        .execute(&Statement::new("TRUNCATE vsim_affected"))
        .await
        .unwrap();

    let inserted = executor
        .execute(
            &Statement::new("INSERT INTO vsim_affected VALUES ($1), ($2)")
                .bind(1_i64)
                .bind(2_i64),
        )
        .await
        .unwrap();
    assert_eq!(inserted, 2);

    let deleted = executor
        .execute(&Statement::new("DELETE FROM vsim_affected WHERE id = $1").bind(3_i64))
        .await
        .unwrap();
    assert_eq!(deleted, 0);
}
