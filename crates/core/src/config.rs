//! Runtime configuration for a batch run.

use std::time::Duration;

use crate::constants::*;
use crate::env_config::{env_parse_with_default, env_string_with_default};

/// Everything a batch run needs to reach the embedding service and the database.
///
/// Built once at startup and handed to the components explicitly; nothing
/// downstream reads the environment on its own.
#[derive(Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub service_url: String,
    pub model_name: String,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub http_timeout_secs: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_owned(),
            model_name: DEFAULT_MODEL_NAME.to_owned(),
            db_host: DEFAULT_DB_HOST.to_owned(),
            db_port: DEFAULT_DB_PORT,
            db_name: DEFAULT_DB_NAME.to_owned(),
            db_user: DEFAULT_DB_USER.to_owned(),
            db_password: DEFAULT_DB_PASSWORD.to_owned(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for BatchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchConfig")
            .field("service_url", &self.service_url)
            .field("model_name", &self.model_name)
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_name", &self.db_name)
            .field("db_user", &self.db_user)
            .field("db_password", &"***")
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish()
    }
}

impl BatchConfig {
    /// Compiled-in defaults, with any `INTENT_EMBED_*` variable overriding its field.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            service_url: env_string_with_default(ENV_SERVICE_URL, &defaults.service_url),
            model_name: env_string_with_default(ENV_MODEL_NAME, &defaults.model_name),
            db_host: env_string_with_default(ENV_DB_HOST, &defaults.db_host),
            db_port: env_parse_with_default(ENV_DB_PORT, defaults.db_port),
            db_name: env_string_with_default(ENV_DB_NAME, &defaults.db_name),
            db_user: env_string_with_default(ENV_DB_USER, &defaults.db_user),
            db_password: env_string_with_default(ENV_DB_PASSWORD, &defaults.db_password),
            http_timeout_secs: env_parse_with_default(
                ENV_HTTP_TIMEOUT_SECS,
                defaults.http_timeout_secs,
            ),
        }
    }

    #[must_use]
    pub const fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// `host:port/db` for log lines; never includes credentials.
    #[must_use]
    pub fn database_label(&self) -> String {
        format!("{}:{}/{}", self.db_host, self.db_port, self.db_name)
    }
}
