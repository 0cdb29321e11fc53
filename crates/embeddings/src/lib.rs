//! Embedding generation through an Ollama-compatible HTTP service.

mod client;
#[cfg(test)]
mod client_tests;
pub mod error;
mod provider;

pub use client::{OllamaClient, EMBEDDINGS_PATH, TAGS_PATH};
pub use error::EmbeddingError;
pub use provider::EmbeddingProvider;
