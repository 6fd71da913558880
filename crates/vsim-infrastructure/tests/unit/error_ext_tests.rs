//! Error context extension tests

use std::io;
use vsim_domain::error::Error;
use vsim_infrastructure::error_ext::ErrorContext;

fn failing() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "vsim.toml"))
}

#[test]
fn test_context_maps_to_internal() {
    let err = failing().context("Reading config").unwrap_err();
    assert!(matches!(err, Error::Internal { .. }));
    assert_eq!(err.to_string(), "Internal error: Reading config: vsim.toml");
}

#[test]
fn test_with_context_is_lazy() {
    let ok: Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 1);

    let err = failing().with_context(|| format!("attempt {}", 2)).unwrap_err();
    assert!(err.to_string().contains("attempt 2"));
}

#[test]
fn test_config_context_keeps_source() {
    let err = failing().config_context("Loading").unwrap_err();
    match err {
        Error::Configuration { message, source } => {
            assert!(message.starts_with("Loading"));
            assert!(source.is_some());
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_db_context_is_storage_error() {
    let err = failing().db_context("Connecting").unwrap_err();
    assert!(matches!(err, Error::Storage { source: Some(_), .. }));
    assert!(!err.is_caller_error());
}
