//! Command-line arguments for the `life` binary.

use std::fmt;
use std::path::PathBuf;

/// Wrong number of arguments; displays the usage line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError {
    program: String,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Usage: {} <filename>", self.program)
    }
}

impl std::error::Error for UsageError {}

/// Extract the pattern path from `argv` (program name first).
///
/// Exactly one argument is accepted.
pub fn pattern_path<S: AsRef<str>>(args: &[S]) -> Result<PathBuf, UsageError> {
    match args {
        [_, path] => Ok(PathBuf::from(path.as_ref())),
        _ => Err(UsageError {
            program: args
                .first()
                .map(|s| s.as_ref().to_string())
                .unwrap_or_else(|| "life".to_string()),
        }),
    }
}
