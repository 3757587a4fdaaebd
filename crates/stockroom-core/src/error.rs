//! Stockroom error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the core crate.
pub type StockResult<T> = Result<T, StockError>;

/// Errors that can occur in inventory and cart operations.
#[derive(Error, Debug)]
pub enum StockError {
    /// User input failed to parse or was out of range.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No item with the given id exists in the inventory.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Reading or writing the data file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Arithmetic overflow in a quantity or price calculation.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,
}

impl StockError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::ItemNotFound(id.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if this is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an unknown-id failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound(_))
    }
}
