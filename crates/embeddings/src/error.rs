//! Typed error enum for the embeddings crate.

use thiserror::Error;

/// Errors from embedding generation and service probing.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("embedding generation returned empty result")]
    EmptyResult,
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl EmbeddingError {
    /// Whether the service could not be reached at all (nothing listening, DNS, refused).
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::HttpRequest(e) if e.is_connect())
    }
}
