use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BlueboardError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BlueboardError::not_found("x")
            .to_string()
            .contains("not found:")
    );
    assert!(
        BlueboardError::remote("x")
            .to_string()
            .contains("remote generation error:")
    );
    assert!(
        BlueboardError::storage("x")
            .to_string()
            .contains("storage error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BlueboardError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_convert() {
    let err: BlueboardError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, BlueboardError::Serde(_)));
    assert!(err.to_string().contains("serialization error:"));
}
