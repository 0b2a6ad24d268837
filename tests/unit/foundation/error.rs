use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FramecastError::validation_one("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FramecastError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        FramecastError::transport("x")
            .to_string()
            .contains("transport error:")
    );
    assert!(
        FramecastError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn validation_display_joins_accumulated_errors() {
    let err = FramecastError::validation(vec!["first".to_string(), "second".to_string()]);
    assert_eq!(err.to_string(), "validation error: first; second");
}

#[test]
fn validation_errors_accessor_exposes_the_list() {
    let err = FramecastError::validation(vec!["only".to_string()]);
    assert_eq!(err.validation_errors(), Some(&["only".to_string()][..]));
    assert_eq!(FramecastError::config("x").validation_errors(), None);
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FramecastError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
