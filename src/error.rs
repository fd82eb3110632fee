use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MutantError>;

/// Recoverable failures at the edges of the engine: files, records and
/// configuration. Shape violations inside the engine panic instead.
#[derive(Error, Debug)]
pub enum MutantError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {reason}")]
    Record { line: usize, reason: String },

    #[error("unknown class label {0:?}")]
    UnknownLabel(String),

    #[error("malformed hyperparameters: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid hyperparameter {name}: {reason}")]
    InvalidHyper { name: &'static str, reason: String },
}
