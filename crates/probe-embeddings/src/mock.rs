//! Deterministic embedding clients for testing.
//!
//! Useful for exercising probes without an embedding service.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::RetrievalError;
use crate::model::{Embedding, EmbeddingClient};

/// Client serving canned vectors per (model, text).
///
/// Unknown pairs and injected failures return [`RetrievalError::Transport`].
/// Every call, successful or not, is recorded.
#[derive(Default)]
pub struct StaticEmbeddingClient {
    vectors: HashMap<(String, String), Vec<f64>>,
    failing_texts: HashSet<String>,
    fail_on_call: Option<usize>,
    calls: Mutex<Vec<(String, String)>>,
}

impl StaticEmbeddingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `values` for `text` under `model`.
    pub fn with_vector(
        mut self,
        model: impl Into<String>,
        text: impl Into<String>,
        values: Vec<f64>,
    ) -> Self {
        self.vectors.insert((model.into(), text.into()), values);
        self
    }

    /// Fail every request for `text`, whatever the model.
    pub fn with_failure(mut self, text: impl Into<String>) -> Self {
        self.failing_texts.insert(text.into());
        self
    }

    /// Fail the `n`th request (1-based) regardless of its arguments.
    pub fn fail_on_call(mut self, n: usize) -> Self {
        self.fail_on_call = Some(n);
        self
    }

    /// Requests received so far, in order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

#[async_trait]
impl EmbeddingClient for StaticEmbeddingClient {
    async fn get(&self, model: &str, text: &str) -> Result<Embedding, RetrievalError> {
        let call_number = {
            let mut calls = self
                .calls
                .lock()
                .map_err(|_| RetrievalError::Transport("call log poisoned".to_string()))?;
            calls.push((model.to_string(), text.to_string()));
            calls.len()
        };

        if self.fail_on_call == Some(call_number) || self.failing_texts.contains(text) {
            return Err(RetrievalError::Transport(format!(
                "injected failure on call {call_number}"
            )));
        }

        self.vectors
            .get(&(model.to_string(), text.to_string()))
            .cloned()
            .map(Embedding::new)
            .ok_or_else(|| {
                RetrievalError::Transport(format!("no vector for model {model}: {text}"))
            })
    }
}

/// Default dimension of [`HashEmbeddingClient`] vectors.
pub const DEFAULT_HASH_DIMENSION: usize = 64;

/// Deterministic bag-of-tokens embedding seeded by the model name.
///
/// Different models give different vectors for the same text, and any text
/// with at least one non-whitespace character gives a non-zero vector.
pub fn hash_embedding(model: &str, text: &str, dim: usize) -> Vec<f64> {
    let dim = dim.max(8);
    let mut values = vec![0.0f64; dim];

    for token in text.split_whitespace() {
        let token = token.to_lowercase();
        values[(fnv1a(model, &token) % dim as u64) as usize] += 1.0;

        let mut buf = [0u8; 4];
        for ch in token.chars() {
            let idx = fnv1a(model, ch.encode_utf8(&mut buf)) % dim as u64;
            values[idx as usize] += 0.5;
        }
    }

    values
}

fn fnv1a(model: &str, token: &str) -> u64 {
    let mut h: u64 = 1469598103934665603;
    for b in model.bytes().chain([0xffu8]).chain(token.bytes()) {
        h ^= b as u64;
        h = h.wrapping_mul(1099511628211);
    }
    h
}

/// Client answering every request with [`hash_embedding`].
#[derive(Debug, Clone)]
pub struct HashEmbeddingClient {
    dim: usize,
}

impl HashEmbeddingClient {
    pub fn new(dim: usize) -> Self {
        Self { dim: dim.max(8) }
    }
}

impl Default for HashEmbeddingClient {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_DIMENSION)
    }
}

#[async_trait]
impl EmbeddingClient for HashEmbeddingClient {
    async fn get(&self, model: &str, text: &str) -> Result<Embedding, RetrievalError> {
        Ok(Embedding::new(hash_embedding(model, text, self.dim)))
    }
}
