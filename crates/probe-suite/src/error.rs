//! Probe error types.

use thiserror::Error;

use probe_embeddings::{RetrievalError, VectorError};

/// Errors that abort a probe evaluation.
///
/// `context` names the input that triggered the failure (term, pair index,
/// evidence index).
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Embedding could not be fetched
    #[error("Failed to get embedding for {context}: {source}")]
    Retrieval {
        context: String,
        #[source]
        source: RetrievalError,
    },

    /// Vector arithmetic rejected the embeddings
    #[error("Failed to compute {context}: {source}")]
    Vector {
        context: String,
        #[source]
        source: VectorError,
    },

    /// Probe was configured without any inputs
    #[error("Probe '{probe}' has no inputs to evaluate")]
    EmptyFixture { probe: String },
}

impl ProbeError {
    pub(crate) fn retrieval(context: impl Into<String>) -> impl FnOnce(RetrievalError) -> Self {
        let context = context.into();
        move |source| ProbeError::Retrieval { context, source }
    }

    pub(crate) fn vector(context: impl Into<String>) -> impl FnOnce(VectorError) -> Self {
        let context = context.into();
        move |source| ProbeError::Vector { context, source }
    }
}
