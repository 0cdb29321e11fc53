//! Transaction-scoped reads and writes of `intent_embeddings`.

use async_trait::async_trait;
use intent_embed_core::{PendingIntent, format_vector_literal};
use sqlx::{Postgres, Transaction};

use super::{
    PENDING_INTENTS_QUERY, PgIntentStore, UPDATE_EMBEDDING_QUERY, row_to_pending_intent,
};
use crate::error::StorageError;
use crate::traits::{IntentStore, IntentTransaction};

/// Open transaction on the store's connection.
#[derive(Debug)]
pub struct PgIntentTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl IntentStore for PgIntentStore {
    type Tx = PgIntentTransaction;

    async fn begin(&self) -> Result<PgIntentTransaction, StorageError> {
        let tx = self.pool.begin().await?;
        tracing::debug!("transaction started");
        Ok(PgIntentTransaction { tx })
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::debug!("database connection closed");
    }
}

#[async_trait]
impl IntentTransaction for PgIntentTransaction {
    async fn pending_intents(&mut self) -> Result<Vec<PendingIntent>, StorageError> {
        let rows = sqlx::query(PENDING_INTENTS_QUERY).fetch_all(&mut *self.tx).await?;
        rows.iter().map(row_to_pending_intent).collect()
    }

    async fn store_embedding(
        &mut self,
        intent_id: i64,
        embedding: &[f32],
    ) -> Result<(), StorageError> {
        let literal = format_vector_literal(embedding);
        let result = sqlx::query(UPDATE_EMBEDDING_QUERY)
            .bind(&literal)
            .bind(intent_id)
            .execute(&mut *self.tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound { entity: "intent", id: intent_id.to_string() });
        }
        Ok(())
    }

    async fn commit(self) -> Result<(), StorageError> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self) -> Result<(), StorageError> {
        self.tx.rollback().await?;
        Ok(())
    }
}
