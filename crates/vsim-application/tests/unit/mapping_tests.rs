//! Tests for the row mapper

use crate::test_utils::{APPLE, STEAK, distance_row, item_row};
use vsim_application::mapping::{
    map_category_count, map_item, map_item_with_all_distances, map_item_with_distance, map_rows,
};
use vsim_domain::error::Error;
use vsim_domain::ports::{ResultRow, SqlValue};
use vsim_domain::Price;

#[test]
fn test_map_item_reads_every_column() {
    let item = map_item(&item_row(1, "Apple", "Fruit", "1.50", APPLE)).unwrap();

    assert_eq!(item.id, Some(1));
    assert_eq!(item.name, "Apple");
    assert_eq!(item.category.as_deref(), Some("Fruit"));
    assert_eq!(item.price, Some(Price::from_cents(150)));
    assert_eq!(item.embedding, Some(vec![1.0, 0.5, 0.2, 0.1]));
    assert!(item.created_at.is_some());
}

#[test]
fn test_map_item_accepts_nulls_in_optional_columns() {
    let row = ResultRow::new()
        .with("id", SqlValue::Int(9))
        .with("name", SqlValue::Text("Mystery".to_string()))
        .with("category", SqlValue::Null)
        .with("price", SqlValue::Null)
        .with("embedding", SqlValue::Null)
        .with("created_at", SqlValue::Null);

    let item = map_item(&row).unwrap();
    assert_eq!(item.category, None);
    assert_eq!(item.price, None);
    assert_eq!(item.embedding, None);
    assert_eq!(item.created_at, None);
}

#[test]
fn test_map_item_with_distance() {
    let row = distance_row(2, "Broccoli", "Vegetable", "[0.2,0.1,0.8,0.3]", 0.25);
    let result = map_item_with_distance(&row).unwrap();

    assert_eq!(result.item.name, "Broccoli");
    assert!((result.distance - 0.25).abs() < f64::EPSILON);
}

#[test]
fn test_map_item_with_all_distances() {
    let row = item_row(1, "Apple", "Fruit", "1.50", APPLE)
        .with("l2_distance", SqlValue::Float(0.0))
        .with("cosine_distance", SqlValue::Float(0.0))
        .with("neg_inner_product", SqlValue::Float(-1.3))
        .with("l1_distance", SqlValue::Float(0.0));

    let result = map_item_with_all_distances(&row).unwrap();
    assert_eq!(result.item.id, Some(1));
    assert!((result.neg_inner_product + 1.3).abs() < 1e-9);
    assert!(result.l2.abs() < f64::EPSILON);
}

#[test]
fn test_missing_distance_column_is_mapping_error() {
    let row = item_row(1, "Apple", "Fruit", "1.50", APPLE);
    let err = map_item_with_distance(&row).unwrap_err();
    assert!(matches!(err, Error::Mapping { .. }));
    assert!(err.to_string().contains("distance"));
}

fn steak_row(embedding: &str) -> ResultRow {
    ResultRow::new()
        .with("id", SqlValue::Int(3))
        .with("name", SqlValue::Text("Steak".to_string()))
        .with("category", SqlValue::Text("Meat".to_string()))
        .with("price", SqlValue::Text("12.99".to_string()))
        .with("embedding", SqlValue::Text(embedding.to_string()))
        .with("created_at", SqlValue::Null)
}

#[test]
fn test_textual_embedding_is_decoded() {
    let item = map_item(&steak_row("[0.1, 0.2, 0.3, 0.9]")).unwrap();
    assert_eq!(item.embedding, Some(vec![0.1, 0.2, 0.3, 0.9]));
}

#[test]
fn test_bad_embedding_text_is_mapping_error() {
    let err = map_item(&steak_row("[0.1,oops,0.3,0.9]")).unwrap_err();
    assert!(matches!(err, Error::Mapping { .. }));
    assert!(err.to_string().contains("item 3"));
}

#[test]
fn test_bad_price_text_is_mapping_error() {
    let row = item_row(3, "Steak", "Meat", "twelve", STEAK);
    assert!(matches!(map_item(&row), Err(Error::Mapping { .. })));
}

#[test]
fn test_wrong_column_type_is_mapping_error() {
    let row = ResultRow::new()
        .with("id", SqlValue::Text("1".to_string()))
        .with("name", SqlValue::Text("Apple".to_string()));
    assert!(matches!(map_item(&row), Err(Error::Mapping { .. })));
}

#[test]
fn test_map_category_count() {
    let row = ResultRow::new()
        .with("category", SqlValue::Text("Fruit".to_string()))
        .with("item_count", SqlValue::Int(3));
    let count = map_category_count(&row).unwrap();
    assert_eq!(count.category.as_deref(), Some("Fruit"));
    assert_eq!(count.count, 3);

    let uncategorized = ResultRow::new()
        .with("category", SqlValue::Null)
        .with("item_count", SqlValue::Int(1));
    assert_eq!(map_category_count(&uncategorized).unwrap().category, None);
}

#[test]
fn test_map_rows_preserves_order_and_stops_at_failure() {
    let rows = vec![
        item_row(2, "Banana", "Fruit", "0.99", APPLE),
        item_row(1, "Apple", "Fruit", "1.50", APPLE),
    ];
    let items = map_rows(&rows, map_item).unwrap();
    assert_eq!(items[0].name, "Banana");
    assert_eq!(items[1].name, "Apple");

    let broken = vec![rows[0].clone(), ResultRow::new()];
    assert!(map_rows(&broken, map_item).is_err());
}
