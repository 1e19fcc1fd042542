//! Embedding error types.

use thiserror::Error;

/// Errors from fetching an embedding.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// Endpoint URL could not be parsed
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Connection or transport failure
    #[error("Embedding request failed: {0}")]
    Transport(String),

    /// Service answered with a non-success status
    #[error("Embedding service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not `{"embedding": [...]}`
    #[error("Failed to decode embedding response: {0}")]
    Decode(String),
}

/// Errors from vector arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// Operands have different lengths
    #[error("Dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Cosine similarity against a zero-magnitude vector
    #[error("Zero magnitude vector")]
    DegenerateVector,
}
