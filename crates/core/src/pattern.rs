//! Pattern files - initial Life grids loaded from plain text
//!
//! Format: up to 25 lines of up to 80 characters. `*` marks a live cell, any other
//! character marks a dead one. Short lines leave their trailing cells dead; columns
//! past 80 and lines past 25 are ignored. Both `\n` and `\r\n` line endings work.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::grid::LifeGrid;
use crate::types::{LIFE_COLS, LIFE_ROWS};

/// Marker for a live cell in pattern files
pub const LIVE_CELL: u8 = b'*';

#[derive(Debug)]
pub enum LoadError {
    NotFound(PathBuf),
    Io { path: PathBuf, source: io::Error },
}

impl LoadError {
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::NotFound(_) => "not_found",
            LoadError::Io { .. } => "io",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound(path) | LoadError::Io { path, .. } => path,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(path) => write!(f, "pattern file not found: {}", path.display()),
            LoadError::Io { path, source } => {
                write!(f, "could not read pattern file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::NotFound(_) => None,
            LoadError::Io { source, .. } => Some(source),
        }
    }
}

/// Parse pattern text into a fresh grid. Never fails: unknown bytes are dead cells.
pub fn parse_pattern(bytes: &[u8]) -> LifeGrid {
    let mut grid = LifeGrid::new();
    for (row, line) in bytes.split(|&b| b == b'\n').take(LIFE_ROWS).enumerate() {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        for (col, &b) in line.iter().take(LIFE_COLS).enumerate() {
            if b == LIVE_CELL {
                grid.set(row, col, true);
            }
        }
    }
    grid
}

/// Load a pattern file.
pub fn load_pattern(path: impl AsRef<Path>) -> Result<LifeGrid, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(parse_pattern(&bytes))
}

/// Load a pattern file over `grid`. On failure `grid` is left untouched.
pub fn load_pattern_into(path: impl AsRef<Path>, grid: &mut LifeGrid) -> Result<(), LoadError> {
    *grid = load_pattern(path)?;
    Ok(())
}
