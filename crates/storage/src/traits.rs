//! Storage backend trait abstraction
//!
//! A store hands out one transaction per batch run; every read and write of
//! the run goes through that transaction, which is then either committed or
//! rolled back as a whole.

use async_trait::async_trait;
use intent_embed_core::PendingIntent;

use crate::error::StorageError;

/// Source of transactions over `intent_embeddings`.
#[async_trait]
pub trait IntentStore: Send + Sync {
    type Tx: IntentTransaction;

    /// Acquire a connection (if none is open yet) and start a transaction.
    async fn begin(&self) -> Result<Self::Tx, StorageError>;

    /// Release every connection held by the store.
    async fn close(&self);
}

/// A single open transaction.
///
/// Dropping it without calling `commit` discards its writes.
#[async_trait]
pub trait IntentTransaction: Send {
    /// Rows without an embedding, plus every enabled row, in id order.
    async fn pending_intents(&mut self) -> Result<Vec<PendingIntent>, StorageError>;

    /// Overwrite the embedding of one row.
    async fn store_embedding(
        &mut self,
        intent_id: i64,
        embedding: &[f32],
    ) -> Result<(), StorageError>;

    async fn commit(self) -> Result<(), StorageError>;

    async fn rollback(self) -> Result<(), StorageError>;
}
