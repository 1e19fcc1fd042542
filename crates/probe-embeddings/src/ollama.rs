//! HTTP client for Ollama-compatible embedding endpoints.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::RetrievalError;
use crate::model::{Embedding, EmbeddingClient};

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    embedding: Vec<f64>,
}

/// Embedding client that POSTs `{"model", "prompt"}` and expects
/// `{"embedding": [...]}` back.
///
/// Uses the transport's default timeout and never retries.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    endpoint: Url,
}

impl OllamaClient {
    /// Create a client for the full embeddings URL,
    /// e.g. `http://localhost:11434/api/embeddings`.
    pub fn new(endpoint: &str) -> Result<Self, RetrievalError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| RetrievalError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        let client = Client::builder()
            .build()
            .map_err(|e| RetrievalError::Transport(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait]
impl EmbeddingClient for OllamaClient {
    async fn get(&self, model: &str, text: &str) -> Result<Embedding, RetrievalError> {
        debug!(model, chars = text.chars().count(), "Requesting embedding");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&EmbeddingRequest {
                model,
                prompt: text,
            })
            .send()
            .await
            .map_err(|e| RetrievalError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                model,
                status = status.as_u16(),
                "Embedding request rejected"
            );
            return Err(RetrievalError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RetrievalError::Transport(e.to_string()))?;
        let body: EmbeddingResponse = serde_json::from_slice(&bytes)
            .map_err(|e| RetrievalError::Decode(e.to_string()))?;

        let embedding = Embedding::new(body.embedding);
        if embedding.dimension() == 0 {
            warn!(model, "Embedding service returned an empty vector");
        } else {
            debug!(
                model,
                dimension = embedding.dimension(),
                "Received embedding"
            );
        }
        Ok(embedding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> OllamaClient {
        OllamaClient::new(&format!("{}/api/embeddings", server.uri())).unwrap()
    }

    fn reply(body: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(body)
    }

    #[tokio::test]
    async fn test_get_embedding() {
        let server = MockServer::start().await;
        let request = json!({"model": "nomic-embed-text", "prompt": "Paris"});
        Mock::given(method("POST"))
            .and(path("/api/embeddings"))
            .and(body_json(request))
            .respond_with(reply(json!({"embedding": [0.25, -1.5, 3.0]})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let emb = client.get("nomic-embed-text", "Paris").await.unwrap();
        assert_eq!(emb.values, vec![0.25, -1.5, 3.0]);
    }

    #[tokio::test]
    async fn test_every_call_is_a_fresh_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply(json!({"embedding": [1.0]})))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.get("m", "same text").await.unwrap();
        client.get("m", "same text").await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("model \"x\" not found"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        match client.get("x", "text").await {
            Err(RetrievalError::Status { status, body }) => {
                assert_eq!(status, 404);
                assert!(body.contains("not found"));
            }
            other => panic!("Expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_wrong_shape_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply(json!({"embeddings": [[1.0]]})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get("m", "text").await.unwrap_err();
        assert!(matches!(err, RetrievalError::Decode(_)));
    }

    #[tokio::test]
    async fn test_non_numeric_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply(json!({"embedding": ["a", "b"]})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get("m", "text").await.unwrap_err();
        assert!(matches!(err, RetrievalError::Decode(_)));
    }

    #[tokio::test]
    async fn test_empty_vector_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply(json!({"embedding": []})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let emb = client.get("m", "text").await.unwrap();
        assert_eq!(emb.dimension(), 0);
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let endpoint = format!("http://127.0.0.1:{port}/api/embeddings");
        let client = OllamaClient::new(&endpoint).unwrap();
        let err = client.get("m", "text").await.unwrap_err();
        assert!(matches!(err, RetrievalError::Transport(_)));
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = OllamaClient::new("not a url").unwrap_err();
        assert!(matches!(err, RetrievalError::InvalidEndpoint(_)));
    }
}
