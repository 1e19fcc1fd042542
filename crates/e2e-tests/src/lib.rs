//! End-to-end test infrastructure for embedding-probes.
//!
//! Provides a mock Ollama-compatible embedding server backed by
//! [`hash_embedding`] and helpers for running the probe battery over HTTP.

use std::collections::HashSet;

use serde::Deserialize;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use probe_embeddings::{hash_embedding, OllamaClient, DEFAULT_HASH_DIMENSION};

/// Path the mock server serves embeddings on.
pub const EMBEDDINGS_PATH: &str = "/api/embeddings";

/// Request body as sent by `OllamaClient`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmbeddingRequest {
    pub model: String,
    pub prompt: String,
}

/// Answers `{"model", "prompt"}` with a deterministic hash embedding.
///
/// Prompts registered with [`HashEmbeddingResponder::failing`] get a 500.
#[derive(Debug, Clone)]
pub struct HashEmbeddingResponder {
    dim: usize,
    failing_prompts: HashSet<String>,
}

impl HashEmbeddingResponder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            failing_prompts: HashSet::new(),
        }
    }

    /// Respond 500 to every request for `prompt`.
    pub fn failing(mut self, prompt: impl Into<String>) -> Self {
        self.failing_prompts.insert(prompt.into());
        self
    }
}

impl Default for HashEmbeddingResponder {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_DIMENSION)
    }
}

impl Respond for HashEmbeddingResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: EmbeddingRequest = match serde_json::from_slice(&request.body) {
            Ok(body) => body,
            Err(e) => return ResponseTemplate::new(400).set_body_string(e.to_string()),
        };

        if self.failing_prompts.contains(&body.prompt) {
            return ResponseTemplate::new(500).set_body_string("model runner crashed");
        }

        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "embedding": hash_embedding(&body.model, &body.prompt, self.dim)
        }))
    }
}

/// Mock embedding service for E2E tests.
pub struct EmbeddingServer {
    pub server: MockServer,
}

impl EmbeddingServer {
    /// Start a server answering every prompt.
    pub async fn start() -> Self {
        Self::start_with(HashEmbeddingResponder::default()).await
    }

    pub async fn start_with(responder: HashEmbeddingResponder) -> Self {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(EMBEDDINGS_PATH))
            .respond_with(responder)
            .mount(&server)
            .await;
        Self { server }
    }

    /// Full embeddings URL of this server.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.server.uri(), EMBEDDINGS_PATH)
    }

    pub fn client(&self) -> OllamaClient {
        OllamaClient::new(&self.endpoint()).expect("Mock server URI should be valid")
    }

    /// Decoded request bodies received so far, in arrival order.
    pub async fn received(&self) -> Vec<EmbeddingRequest> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).expect("Request body should be JSON"))
            .collect()
    }
}

/// Owned model list from string literals.
pub fn models(names: &[&str]) -> Vec<String> {
    names.iter().map(|m| m.to_string()).collect()
}

/// Embedding requests one model issues for the standard battery.
pub fn standard_requests_per_model() -> usize {
    use probe_suite::fixtures::*;

    let analogy = 4;
    let pairs = 2 * (RUSSIAN_PARAPHRASES.len() + RUSSIAN_FRENCH_TRANSLATIONS.len());
    let evidence: usize = [
        ENGLISH_EVIDENCE.len(),
        FRENCH_EVIDENCE.len(),
        MANDARIN_EVIDENCE.len(),
        RUSSIAN_EVIDENCE.len(),
        MIXED_SPANISH_EVIDENCE.len(),
    ]
    .iter()
    .map(|n| 1 + n)
    .sum();
    analogy + pairs + evidence
}
