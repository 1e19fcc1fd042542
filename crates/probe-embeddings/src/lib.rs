//! # probe-embeddings
//!
//! Embedding retrieval and vector math for the embedding-probes harness.
//!
//! ## Features
//! - `EmbeddingClient` trait: one fresh fetch per (model, text), no caching
//! - `OllamaClient`: HTTP client for `{"model", "prompt"} -> {"embedding"}` endpoints
//! - `similarity`: cosine similarity, Euclidean distance, analogy offsets
//! - Deterministic clients for tests (`StaticEmbeddingClient`, `HashEmbeddingClient`)

pub mod error;
pub mod mock;
pub mod model;
pub mod ollama;
pub mod similarity;

pub use error::{RetrievalError, VectorError};
pub use mock::{
    hash_embedding, HashEmbeddingClient, StaticEmbeddingClient, DEFAULT_HASH_DIMENSION,
};
pub use model::{Embedding, EmbeddingClient};
pub use ollama::OllamaClient;
pub use similarity::{cosine_similarity, euclidean_distance, subtract_add};
