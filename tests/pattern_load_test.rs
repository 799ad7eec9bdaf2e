//! Pattern file loading against the real filesystem

use std::fs;
use std::path::PathBuf;

use term_arcade::core::{load_pattern, load_pattern_into, LifeGrid, LoadError};

fn temp_pattern(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "term-arcade-{}-{}.txt",
        std::process::id(),
        name
    ));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_glider_file() {
    let path = temp_pattern("glider", b".*.\n..*\n***\n");
    let grid = load_pattern(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(grid.population(), 5);
    assert!(grid.is_alive(0, 1));
    assert!(grid.is_alive(1, 2));
    assert!(grid.is_alive(2, 0));
    assert!(grid.is_alive(2, 1));
    assert!(grid.is_alive(2, 2));
}

#[test]
fn test_empty_file_is_an_empty_grid() {
    let path = temp_pattern("empty", b"");
    let grid = load_pattern(&path).unwrap();
    fs::remove_file(&path).ok();
    assert_eq!(grid, LifeGrid::new());
}

#[test]
fn test_missing_file_leaves_grid_untouched() {
    let mut grid = LifeGrid::new();
    grid.set(3, 4, true);
    let before = grid.clone();

    let missing = std::env::temp_dir().join("term-arcade-no-such-pattern.txt");
    let err = load_pattern_into(&missing, &mut grid).unwrap_err();

    assert!(matches!(err, LoadError::NotFound(_)));
    assert_eq!(err.path(), missing.as_path());
    assert_eq!(grid, before);
}

#[test]
fn test_directory_is_an_io_error() {
    let dir = std::env::temp_dir();
    let err = load_pattern(&dir).unwrap_err();
    assert_eq!(err.code(), "io");
}
