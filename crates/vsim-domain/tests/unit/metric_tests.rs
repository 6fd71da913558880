//! Unit tests for DistanceMetric

use vsim_domain::{DistanceMetric, Error};

#[test]
fn test_operator_table() {
    assert_eq!(DistanceMetric::L2.operator(), "<->");
    assert_eq!(DistanceMetric::Cosine.operator(), "<=>");
    assert_eq!(DistanceMetric::InnerProduct.operator(), "<#>");
    assert_eq!(DistanceMetric::L1.operator(), "<+>");
}

#[test]
fn test_column_aliases_are_distinct() {
    let aliases: Vec<_> = DistanceMetric::ALL
        .iter()
        .map(|m| m.column_alias())
        .collect();
    assert_eq!(
        aliases,
        ["l2_distance", "cosine_distance", "neg_inner_product", "l1_distance"]
    );
}

#[test]
fn test_parse_aliases() {
    assert_eq!("euclidean".parse::<DistanceMetric>().unwrap(), DistanceMetric::L2);
    assert_eq!("COSINE".parse::<DistanceMetric>().unwrap(), DistanceMetric::Cosine);
    assert_eq!("ip".parse::<DistanceMetric>().unwrap(), DistanceMetric::InnerProduct);
    assert_eq!("manhattan".parse::<DistanceMetric>().unwrap(), DistanceMetric::L1);
}

#[test]
fn test_parse_unknown_metric() {
    assert!(matches!(
        "hamming".parse::<DistanceMetric>(),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_display_round_trips_through_parse() {
    for metric in DistanceMetric::ALL {
        assert_eq!(metric.to_string().parse::<DistanceMetric>().unwrap(), metric);
    }
}

#[test]
fn test_serde_names() {
    let json = serde_json::to_string(&DistanceMetric::InnerProduct).unwrap();
    assert_eq!(json, "\"inner_product\"");
    assert_eq!(DistanceMetric::default(), DistanceMetric::L2);
}
