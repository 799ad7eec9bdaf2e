//! Environment-driven configuration.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `LIFE_SPEED` | 3 | Initial Life speed level, clamped to 1..=10 |
//! | `ARCADE_LOG_PATH` | unset | Append log lines to this file instead of stderr |
//! | `ARCADE_LOG` | unset | `env_logger` filter, e.g. `debug` or `term_arcade_core=trace` |

use std::env;
use std::path::PathBuf;

use crate::types::{DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcadeConfig {
    pub life_speed: u8,
    pub log_path: Option<PathBuf>,
    pub log_filter: Option<String>,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            life_speed: DEFAULT_SPEED,
            log_path: None,
            log_filter: None,
        }
    }
}

impl ArcadeConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let life_speed = lookup("LIFE_SPEED")
            .and_then(|s| s.trim().parse::<i64>().ok())
            .map(|n| n.clamp(MIN_SPEED as i64, MAX_SPEED as i64) as u8)
            .unwrap_or(DEFAULT_SPEED);

        let log_path = non_empty(lookup("ARCADE_LOG_PATH")).map(PathBuf::from);
        let log_filter = non_empty(lookup("ARCADE_LOG"));

        Self {
            life_speed,
            log_path,
            log_filter,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}
