//! Unit tests for the Item entity and Price value object

use vsim_domain::{Item, Price};

#[test]
fn test_new_item_is_unsaved() {
    let item = Item::new("Apple", Some("Fruit"), Some(Price::from_cents(150)), None);
    assert!(!item.is_persisted());
    assert_eq!(item.category.as_deref(), Some("Fruit"));
    assert!(item.created_at.is_none());
}

#[test]
fn test_item_display_uses_rounded_embedding() {
    let item = Item::new(
        "Broccoli",
        Some("Vegetable"),
        Some(Price::from_cents(199)),
        Some(vec![0.2, 0.1, 0.8, 0.3]),
    );
    assert_eq!(
        item.to_string(),
        "Broccoli (category: Vegetable, price: 1.99, embedding: [0.2, 0.1, 0.8, 0.3])"
    );
}

#[test]
fn test_item_serializes_price_as_string() {
    let item = Item::new("Steak", Some("Meat"), Some(Price::from_cents(1299)), None);
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["price"], "12.99");
    assert_eq!(json["id"], serde_json::Value::Null);
}

#[test]
fn test_item_deserializes_with_defaults() {
    let item: Item =
        serde_json::from_str(r#"{"name":"Pear","price":"2.5","embedding":[0.9,0.4,0.3,0.1]}"#)
            .unwrap();
    assert_eq!(item.name, "Pear");
    assert_eq!(item.price, Some(Price::from_cents(250)));
    assert_eq!(item.embedding, Some(vec![0.9, 0.4, 0.3, 0.1]));
    assert!(item.category.is_none());
}

#[test]
fn test_price_rejects_bad_json() {
    let result: Result<Item, _> = serde_json::from_str(r#"{"name":"Pear","price":"2.555"}"#);
    assert!(result.is_err());
}

#[test]
fn test_price_ordering() {
    let cheap: Price = "0.99".parse().unwrap();
    let dear: Price = "10".parse().unwrap();
    assert!(cheap < dear);
}
