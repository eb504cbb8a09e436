use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the indenter library.
#[derive(Debug, Error)]
pub enum IndentError {
    /// A composition operator was given an operand kind it does not support,
    /// e.g. subtracting text from an indenter.
    #[error("cannot {operation} {operand} operand")]
    TypeMismatch {
        operation: &'static str,
        operand: &'static str,
    },

    #[error("failed to read indenter config {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid indenter config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IndentError>;
