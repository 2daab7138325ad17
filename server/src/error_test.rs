use std::error::Error as _;

use leptos::prelude::get_configuration;

use super::*;

#[test]
fn config_error_keeps_source() {
    let Err(source) = get_configuration(Some("/__stavlav_missing__/Cargo.toml")) else {
        panic!("configuration unexpectedly loaded from a missing file");
    };
    let err = ServerError::from(source);

    assert!(matches!(err, ServerError::Config(_)));
    assert!(err.to_string().starts_with("leptos configuration: "));
    assert!(err.source().is_some());
}

#[test]
fn bind_error_keeps_io_source() {
    let err = ServerError::Bind {
        addr: "0.0.0.0:80".to_owned(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };

    assert_eq!(err.to_string(), "failed to bind 0.0.0.0:80: denied");
    let source = err.source().expect("io source");
    assert_eq!(source.to_string(), "denied");
}
