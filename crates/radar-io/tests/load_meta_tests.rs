use radar_io::{load_meta, MetaError, META_FILE_NAME};
use tempfile::TempDir;

#[test]
fn test_meta_from_input_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(META_FILE_NAME),
        "title: Platform Radar\nrings:\n  - name: Use\n  - name: Avoid\n",
    )
    .unwrap();

    let meta = load_meta(None, Some(dir.path())).unwrap();
    assert_eq!(meta.title(), "Platform Radar");
    assert_eq!(meta.rings().len(), 2);
    assert!(meta.is_valid_ring("use"));
    assert_eq!(meta.quadrants().len(), 4);
}

#[test]
fn test_explicit_meta_overrides_input_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(META_FILE_NAME), "title: Ignored\n").unwrap();
    let explicit = dir.path().join("other.yaml");
    std::fs::write(&explicit, "title: Chosen\n").unwrap();

    let meta = load_meta(Some(&explicit), Some(dir.path())).unwrap();
    assert_eq!(meta.title(), "Chosen");
}

#[test]
fn test_missing_meta_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let meta = load_meta(None, Some(dir.path())).unwrap();
    assert_eq!(meta.title(), "My Radar");
    assert_eq!(meta.description(), "Technology Radar");
}

#[test]
fn test_unparsable_meta_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(META_FILE_NAME), "rings: [unclosed").unwrap();

    let meta = load_meta(None, Some(dir.path())).unwrap();
    assert_eq!(meta.rings().len(), 4);
}

#[test]
fn test_invalid_pattern_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(META_FILE_NAME), "file_name_pattern: '(['\n").unwrap();

    let err = load_meta(None, Some(dir.path())).unwrap_err();
    assert!(matches!(err, MetaError::Config(_)));
}

#[test]
fn test_meta_path_that_is_a_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_meta(Some(dir.path()), None).unwrap_err();
    assert!(matches!(err, MetaError::Read { .. }));
}
