//! Typed error enum for the service layer.
//!
//! Unifies embedding-service, storage and input failures of a batch run.
//! Every variant aborts the run; none is retried.

use intent_embed_embeddings::EmbeddingError;
use intent_embed_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    /// Liveness probe failed; the database was never touched.
    #[error("embedding service unavailable: {0}")]
    ServiceUnavailable(#[source] EmbeddingError),

    /// An embedding call failed mid-batch; the transaction was rolled back.
    #[error("embedding service: {0}")]
    Service(#[source] EmbeddingError),

    /// Connection or query failure; rolled back if a transaction was open.
    #[error("database: {0}")]
    Database(#[from] StorageError),

    #[error("intent '{intent}' has no example phrases")]
    EmptyInput { intent: String },

    #[error(
        "intent '{intent}': phrase {index} embedding has {actual} dimensions, expected {expected}"
    )]
    DimensionMismatch { intent: String, expected: usize, actual: usize, index: usize },
}

impl BatchError {
    /// Whether the embedding service could not be reached at all.
    pub fn is_connect_failure(&self) -> bool {
        match self {
            Self::ServiceUnavailable(e) | Self::Service(e) => e.is_connect(),
            _ => false,
        }
    }
}
