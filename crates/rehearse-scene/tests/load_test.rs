//! File-based loader tests.

use std::io::Write;
use std::path::Path;

use rehearse_core::error::RehearsalError;
use rehearse_scene::{Line, load_scene};
use rehearse_test_support::fixtures;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_loading_same_source_twice_yields_equal_scenes() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "cafe.json", fixtures::CAFE_SCENE_JSON);

    // Act
    let first = load_scene(&path).unwrap();
    let second = load_scene(&path).unwrap();

    // Assert
    assert_eq!(first, second);
}

#[test]
fn test_yaml_extension_selects_yaml_parser() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "cafe.yaml", fixtures::CAFE_SCENE_YAML);

    // Act
    let scene = load_scene(&path).unwrap();

    // Assert
    assert_eq!(scene.scene_id, "cafe_order");
    assert_eq!(scene.cutin_count(), 2);
    assert!(matches!(scene.lines[0], Line::Dialogue { .. }));
}

#[test]
fn test_missing_file_is_a_load_error() {
    let result = load_scene(Path::new("/nonexistent/rehearse/scene.json"));

    match result {
        Err(RehearsalError::Load { path, .. }) => {
            assert_eq!(path, Path::new("/nonexistent/rehearse/scene.json"));
        }
        other => panic!("expected Load, got {other:?}"),
    }
}

#[test]
fn test_structurally_invalid_file_is_a_format_error() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.json", r#"{"scene_id": "broken"}"#);

    // Act
    let result = load_scene(&path);

    // Assert
    assert!(matches!(result, Err(RehearsalError::SceneFormat(_))));
}

#[test]
fn test_dangling_reference_is_not_rejected_at_load() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "dangling.json", fixtures::DANGLING_CUTIN_SCENE_JSON);

    // Act
    let result = load_scene(&path);

    // Assert
    assert!(result.is_ok());
}
