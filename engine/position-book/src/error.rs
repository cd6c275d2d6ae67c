//! Error types for PositionBook

use risk_engine::PositionId;
use thiserror::Error;

/// Result type for PositionBook operations
pub type Result<T> = std::result::Result<T, BookError>;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Position not found: {0}")]
    PositionNotFound(PositionId),

    #[error("No position id starts with '{0}'")]
    UnknownIdPrefix(String),

    #[error("Position id prefix '{0}' matches more than one position")]
    AmbiguousIdPrefix(String),

    #[error("State file corrupted: {0}")]
    Corruption(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BookError {
    pub fn corruption(msg: impl Into<String>) -> Self {
        Self::Corruption(msg.into())
    }
}
