use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{IndentError, Result};

pub const DEFAULT_SYMBOL: &str = "  ";

/// Construction options for an [`Indenter`](crate::Indenter).
///
/// Both fields are optional when deserialized; missing ones fall back to
/// depth 0 and two spaces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndenterConfig {
    pub start: i64,
    pub symbol: String,
}

impl IndenterConfig {
    pub fn new() -> Self {
        Self {
            start: 0,
            symbol: DEFAULT_SYMBOL.to_string(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        debug!(start = config.start, symbol = ?config.symbol, "parsed indenter config");
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| IndentError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading indenter config");
        Self::from_json_str(&json)
    }
}

impl Default for IndenterConfig {
    fn default() -> Self {
        Self::new()
    }
}
