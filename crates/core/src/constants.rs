//! Shared constants for intent-embed.
//!
//! Compiled-in defaults for every `BatchConfig` field, plus the
//! environment variable names that override them.

/// Base URL of the local Ollama instance.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:11434";

/// Embedding model (1024 dimensions, matches the `vector(1024)` column).
pub const DEFAULT_MODEL_NAME: &str = "mxbai-embed-large";

pub const DEFAULT_DB_HOST: &str = "127.0.0.1";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_NAME: &str = "walrex_db";
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_PASSWORD: &str = "12345";

/// Per-request timeout for the embedding service, in seconds.
/// Large models on CPU can take a while on the first request (model load).
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 120;

/// PostgreSQL connection acquire timeout in seconds.
pub const PG_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Maximum characters of a phrase echoed in progress logs.
pub const PHRASE_LOG_PREVIEW_LEN: usize = 50;

pub const ENV_SERVICE_URL: &str = "INTENT_EMBED_SERVICE_URL";
pub const ENV_MODEL_NAME: &str = "INTENT_EMBED_MODEL";
pub const ENV_DB_HOST: &str = "INTENT_EMBED_DB_HOST";
pub const ENV_DB_PORT: &str = "INTENT_EMBED_DB_PORT";
pub const ENV_DB_NAME: &str = "INTENT_EMBED_DB_NAME";
pub const ENV_DB_USER: &str = "INTENT_EMBED_DB_USER";
pub const ENV_DB_PASSWORD: &str = "INTENT_EMBED_DB_PASSWORD";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "INTENT_EMBED_HTTP_TIMEOUT_SECS";
