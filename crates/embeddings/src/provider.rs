use async_trait::async_trait;
use intent_embed_core::Embedding;

use crate::error::EmbeddingError;

/// Anything that can turn text into an embedding.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Liveness probe; `Ok` means the service answered with a success status.
    async fn check_available(&self) -> Result<(), EmbeddingError>;

    /// Embed a single piece of text.
    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError>;

    /// Model identifier sent with every request.
    fn model(&self) -> &str;
}
