//! Embedding vector and the retrieval trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::RetrievalError;

/// Embedding vector as returned by the service, not normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    pub values: Vec<f64>,
}

impl Embedding {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Get the embedding dimension
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl From<Vec<f64>> for Embedding {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// Source of embeddings for (model, text) pairs.
///
/// Every call is an independent fetch: implementations must not cache or
/// retry, so a failure surfaces to the caller exactly once.
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Fetch the embedding of `text` produced by `model`.
    async fn get(&self, model: &str, text: &str) -> Result<Embedding, RetrievalError>;
}

#[async_trait]
impl<C: EmbeddingClient + ?Sized> EmbeddingClient for Arc<C> {
    async fn get(&self, model: &str, text: &str) -> Result<Embedding, RetrievalError> {
        (**self).get(model, text).await
    }
}

#[async_trait]
impl<C: EmbeddingClient + ?Sized> EmbeddingClient for Box<C> {
    async fn get(&self, model: &str, text: &str) -> Result<Embedding, RetrievalError> {
        (**self).get(model, text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_dimension() {
        let emb = Embedding::from(vec![3.0, 4.0]);
        assert_eq!(emb.dimension(), 2);
        assert_eq!(emb.as_slice(), &[3.0, 4.0]);
    }
}
