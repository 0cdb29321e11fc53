use std::time::Duration;

use async_trait::async_trait;
use intent_embed_core::{Embedding, truncate_chars};
use serde::{Deserialize, Serialize};

use crate::error::EmbeddingError;
use crate::provider::EmbeddingProvider;

/// Endpoint that embeds a single prompt.
pub const EMBEDDINGS_PATH: &str = "/api/embeddings";
/// Endpoint listing local models; used as the liveness probe.
pub const TAGS_PATH: &str = "/api/tags";

const ERROR_BODY_PREVIEW_LEN: usize = 200;

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    embedding: Embedding,
}

/// Client for the Ollama embeddings API.
#[derive(Debug)]
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Creates a client for `base_url` that embeds with `model`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str, model: &str, timeout: Duration) -> Result<Self, EmbeddingError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EmbeddingError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            model: model.to_owned(),
        })
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn error_for_status(response: reqwest::Response) -> EmbeddingError {
        let code = response.status().as_u16();
        let body =
            response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
        EmbeddingError::HttpStatus {
            code,
            body: truncate_chars(&body, ERROR_BODY_PREVIEW_LEN).to_owned(),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaClient {
    async fn check_available(&self) -> Result<(), EmbeddingError> {
        let response = self.client.get(format!("{}{TAGS_PATH}", self.base_url)).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }
        tracing::debug!(url = %self.base_url, "embedding service is reachable");
        Ok(())
    }

    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        let request = EmbeddingRequest { model: &self.model, prompt: text };
        let response = self
            .client
            .post(format!("{}{EMBEDDINGS_PATH}", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }

        let body = response.text().await?;
        let parsed: EmbeddingResponse =
            serde_json::from_str(&body).map_err(|e| EmbeddingError::JsonParse {
                context: format!(
                    "embeddings response (body: {})",
                    truncate_chars(&body, ERROR_BODY_PREVIEW_LEN)
                ),
                source: e,
            })?;

        if parsed.embedding.is_empty() {
            return Err(EmbeddingError::EmptyResult);
        }
        Ok(parsed.embedding)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
