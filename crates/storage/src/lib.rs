//! Storage layer for intent-embed
//!
//! PostgreSQL (pgvector) access to the `intent_embeddings` table, exposed
//! through transaction-scoped traits so the batch updater never sees sqlx.

pub mod error;
mod pg_storage;
pub mod traits;

pub use error::StorageError;
pub use pg_storage::{PgIntentStore, PgIntentTransaction};
pub use traits::{IntentStore, IntentTransaction};
