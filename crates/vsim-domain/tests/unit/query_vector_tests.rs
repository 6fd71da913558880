//! Unit tests for QueryVector

use vsim_domain::{Error, QueryVector};

#[test]
fn test_parse_and_literal() {
    let query: QueryVector = "[1.0, 0.5, 0.2, 0.1]".parse().unwrap();
    assert_eq!(query.as_slice(), &[1.0, 0.5, 0.2, 0.1]);
    assert_eq!(query.to_sql_literal(), "[1,0.5,0.2,0.1]");
    assert_eq!(query.to_display_string(), "[1.0, 0.5, 0.2, 0.1]");
}

#[test]
fn test_empty_input_is_rejected() {
    assert!(matches!(QueryVector::parse(""), Err(Error::Parse { .. })));
    assert!(matches!(QueryVector::new(Vec::new()), Err(Error::Parse { .. })));
}

#[test]
fn test_non_finite_components_are_rejected() {
    assert!(QueryVector::new(vec![1.0, f32::NAN]).is_err());
    assert!(QueryVector::parse("[1.0, inf]").is_err());
}

#[test]
fn test_malformed_component() {
    assert!(matches!(
        QueryVector::parse("[1.0, abc, 0.2]"),
        Err(Error::Parse { .. })
    ));
}

#[test]
fn test_serde_as_plain_array() {
    let query = QueryVector::new(vec![0.5, 0.25]).unwrap();
    assert_eq!(serde_json::to_string(&query).unwrap(), "[0.5,0.25]");
    assert!(serde_json::from_str::<QueryVector>("[]").is_err());
}
