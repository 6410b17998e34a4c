//! Error types for codec operations.

use thiserror::Error;

/// Errors produced by the block codec and byte-stream adapter.
#[derive(Debug, Error)]
pub enum Error {
    /// Input or output buffer violates a length contract
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;
