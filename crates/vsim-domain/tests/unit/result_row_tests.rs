//! Unit tests for the storage port's row and statement types

use chrono::NaiveDate;
use vsim_domain::Error;
use vsim_domain::ports::{ResultRow, SqlParam, SqlValue, Statement};

fn sample_row() -> ResultRow {
    let created = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    ResultRow::new()
        .with("id", SqlValue::Int(7))
        .with("name", SqlValue::Text("Apple".to_string()))
        .with("category", SqlValue::Null)
        .with("distance", SqlValue::Float(0.25))
        .with("created_at", SqlValue::Timestamp(created))
}

#[test]
fn test_typed_accessors() {
    let row = sample_row();
    assert_eq!(row.get_i64("id").unwrap(), 7);
    assert_eq!(row.get_str("name").unwrap(), "Apple");
    assert_eq!(row.get_opt_str("category").unwrap(), None);
    assert!((row.get_f64("distance").unwrap() - 0.25).abs() < f64::EPSILON);
    assert!(row.get_opt_timestamp("created_at").unwrap().is_some());
}

#[test]
fn test_missing_column_is_mapping_error() {
    let row = sample_row();
    assert!(matches!(row.get("price"), Err(Error::Mapping { .. })));
}

#[test]
fn test_wrong_type_is_mapping_error() {
    let row = sample_row();
    assert!(matches!(row.get_f64("id"), Err(Error::Mapping { .. })));
    assert!(matches!(row.get_i64("name"), Err(Error::Mapping { .. })));
}

#[test]
fn test_null_in_required_column_is_mapping_error() {
    let row = sample_row();
    assert!(matches!(row.get_str("category"), Err(Error::Mapping { .. })));
}

#[test]
fn test_column_names_keep_select_order() {
    let names: Vec<_> = sample_row().column_names().map(str::to_string).collect();
    assert_eq!(names, ["id", "name", "category", "distance", "created_at"]);
}

#[test]
fn test_statement_placeholders_follow_bind_order() {
    let mut stmt = Statement::new("SELECT 1");
    assert_eq!(stmt.push("Fruit"), 1);
    assert_eq!(stmt.push(5_i64), 2);
    assert_eq!(stmt.push(None::<String>), 3);
    assert_eq!(
        stmt.params,
        vec![
            SqlParam::Text("Fruit".to_string()),
            SqlParam::Int(5),
            SqlParam::Null
        ]
    );
}

#[test]
fn test_vector_column_accepts_native_and_text_forms() {
    let row = ResultRow::new()
        .with("native", SqlValue::Vector(vec![1.0, 0.5]))
        .with("text", SqlValue::Text("[0.2, 0.8]".to_string()))
        .with("absent", SqlValue::Null)
        .with("broken", SqlValue::Text("[0.2, x]".to_string()))
        .with("number", SqlValue::Int(3));

    assert_eq!(row.get_opt_vector("native").unwrap(), Some(vec![1.0, 0.5]));
    assert_eq!(row.get_opt_vector("text").unwrap(), Some(vec![0.2, 0.8]));
    assert_eq!(row.get_opt_vector("absent").unwrap(), None);
    assert!(matches!(row.get_opt_vector("broken"), Err(Error::Mapping { .. })));
    assert!(matches!(row.get_opt_vector("number"), Err(Error::Mapping { .. })));
}

#[test]
fn test_query_vector_binds_as_native_vector() {
    let query = vsim_domain::QueryVector::parse("[1.0, 0.5, 0.2, 0.1]").unwrap();
    let stmt = Statement::new("SELECT 1").bind(&query).bind(None::<Vec<f32>>);
    assert_eq!(
        stmt.params,
        vec![
            SqlParam::Vector(Some(vec![1.0, 0.5, 0.2, 0.1])),
            SqlParam::Vector(None)
        ]
    );
}
