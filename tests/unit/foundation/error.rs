use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        EmbuiError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(EmbuiError::scene("x").to_string().contains("scene error:"));
    assert!(
        EmbuiError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        EmbuiError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = EmbuiError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
