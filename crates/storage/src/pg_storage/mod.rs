//! PostgreSQL storage backend using sqlx.

mod intents;

use std::time::Duration;

use intent_embed_core::{BatchConfig, PG_ACQUIRE_TIMEOUT_SECS, PendingIntent};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{PgPool, Row};

use crate::error::StorageError;

pub use intents::PgIntentTransaction;

/// `intent_embeddings` store backed by a single lazily-opened connection.
#[derive(Clone, Debug)]
pub struct PgIntentStore {
    pool: PgPool,
}

impl PgIntentStore {
    /// Prepare a store for `config` without touching the network.
    ///
    /// The connection is opened by the first `begin`, so a run that aborts
    /// before the database phase never connects.
    #[must_use]
    pub fn connect_lazy(config: &BatchConfig) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .database(&config.db_name)
            .username(&config.db_user)
            .password(&config.db_password);
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(PG_ACQUIRE_TIMEOUT_SECS))
            .connect_lazy_with(options);
        tracing::debug!(database = %config.database_label(), "PgIntentStore prepared");
        Self { pool }
    }

    /// Connect with a `postgres://` URL (integration tests, ad-hoc tooling).
    ///
    /// # Errors
    /// Returns an error if the URL cannot be parsed.
    pub fn connect_lazy_url(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(PG_ACQUIRE_TIMEOUT_SECS))
            .connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    /// Underlying pool, for fixtures that need raw SQL.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

pub(crate) const PENDING_INTENTS_QUERY: &str = "SELECT id::bigint AS id, intent_name, example_phrases
       FROM intent_embeddings
      WHERE embedding IS NULL OR enabled = true
      ORDER BY id";

pub(crate) const UPDATE_EMBEDDING_QUERY: &str = "UPDATE intent_embeddings
        SET embedding = $1::vector,
            updated_at = CURRENT_TIMESTAMP
      WHERE id = $2";

pub(crate) fn row_to_pending_intent(
    row: &sqlx::postgres::PgRow,
) -> Result<PendingIntent, StorageError> {
    let example_phrases: Option<Vec<String>> = row.try_get("example_phrases")?;
    Ok(PendingIntent {
        id: row.try_get("id")?,
        intent_name: row.try_get("intent_name")?,
        example_phrases: example_phrases.unwrap_or_default(),
    })
}
