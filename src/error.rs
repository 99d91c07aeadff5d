use std::path::PathBuf;

use thiserror::Error;

/// Classifies blocklist engine errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing settings, table size below the minimum
    Config,
    /// Blocklist could not be opened, a read/write failed, or output
    /// could not be encoded
    Io,
    /// Storage for the table or an entry could not be allocated
    ResourceExhausted,
}

/// Blocklist engine error types
#[derive(Error, Debug)]
pub enum BlockError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Table size {size} is too small: value must be equal or larger than {min}")]
    TableTooSmall { size: usize, min: usize },

    #[error("File {} could not be opened: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BlockError {
    /// Coarse classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlockError::Config(_) | BlockError::TableTooSmall { .. } => ErrorKind::Config,
            BlockError::Open { .. } | BlockError::Io(_) | BlockError::Json(_) => {
                ErrorKind::Io
            }
            BlockError::ResourceExhausted(_) => ErrorKind::ResourceExhausted,
        }
    }
}

pub type Result<T> = std::result::Result<T, BlockError>;
