use std::fmt;

use intent_embed_core::{
    Embedding, PHRASE_LOG_PREVIEW_LEN, PendingIntent, VectorError, mean_embedding, truncate_chars,
};
use intent_embed_embeddings::EmbeddingProvider;
use intent_embed_storage::{IntentStore, IntentTransaction};

use crate::error::BatchError;

/// Where a batch run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Idle,
    ServiceCheck,
    Processing { current: usize, total: usize },
    Committing,
    Done,
    Failed,
}

impl fmt::Display for BatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::ServiceCheck => f.write_str("service-check"),
            Self::Processing { current, total } => write!(f, "processing {current}/{total}"),
            Self::Committing => f.write_str("committing"),
            Self::Done => f.write_str("done"),
            Self::Failed => f.write_str("failed"),
        }
    }
}

/// One intent whose embedding was rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentOutcome {
    pub id: i64,
    pub intent_name: String,
    pub phrases: usize,
    pub dimensions: usize,
}

/// Summary of a committed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub selected: usize,
    pub phrases_embedded: usize,
    pub intents: Vec<IntentOutcome>,
}

impl BatchReport {
    #[must_use]
    pub fn updated(&self) -> usize {
        self.intents.len()
    }
}

/// Recomputes intent embeddings from their example phrases.
///
/// Runs are strictly sequential: one HTTP request and one transaction at a time.
pub struct BatchUpdater<P, S> {
    provider: P,
    store: S,
}

impl<P, S> BatchUpdater<P, S>
where
    P: EmbeddingProvider,
    S: IntentStore,
{
    #[must_use]
    pub const fn new(provider: P, store: S) -> Self {
        Self { provider, store }
    }

    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Run the whole batch and return what was committed.
    ///
    /// Nothing is written unless every selected row succeeds; on the first
    /// failure the transaction is rolled back and that failure is returned.
    pub async fn run(&self) -> Result<BatchReport, BatchError> {
        let mut state = BatchState::Idle;

        transition(&mut state, BatchState::ServiceCheck);
        if let Err(err) = self.provider.check_available().await {
            transition(&mut state, BatchState::Failed);
            return Err(BatchError::ServiceUnavailable(err));
        }
        tracing::info!(model = self.provider.model(), "embedding service is running");

        let mut tx = match self.store.begin().await {
            Ok(tx) => tx,
            Err(err) => {
                transition(&mut state, BatchState::Failed);
                return Err(err.into());
            },
        };

        match self.process_rows(&mut tx, &mut state).await {
            Ok(report) => {
                transition(&mut state, BatchState::Committing);
                if let Err(err) = tx.commit().await {
                    transition(&mut state, BatchState::Failed);
                    return Err(err.into());
                }
                transition(&mut state, BatchState::Done);
                Ok(report)
            },
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "rollback failed");
                } else {
                    tracing::warn!("transaction rolled back, no embeddings were saved");
                }
                transition(&mut state, BatchState::Failed);
                Err(err)
            },
        }
    }

    /// Release the database connection. Call once after the last `run`.
    pub async fn shutdown(self) {
        self.store.close().await;
    }

    /// Embed each phrase in order and average the results position-wise.
    pub async fn intent_embedding(&self, intent: &PendingIntent) -> Result<Embedding, BatchError> {
        if intent.example_phrases.is_empty() {
            return Err(BatchError::EmptyInput { intent: intent.intent_name.clone() });
        }
        tracing::info!(
            intent = %intent.intent_name,
            phrases = intent.example_phrases.len(),
            "processing example phrases"
        );

        let mut vectors = Vec::with_capacity(intent.example_phrases.len());
        for phrase in &intent.example_phrases {
            tracing::info!(
                phrase = %truncate_chars(phrase, PHRASE_LOG_PREVIEW_LEN),
                "generating embedding"
            );
            let vector = self.provider.embed(phrase).await.map_err(BatchError::Service)?;
            tracing::info!(dimensions = vector.len(), "embedding generated");
            vectors.push(vector);
        }

        mean_embedding(&vectors).map_err(|err| match err {
            VectorError::Empty => BatchError::EmptyInput { intent: intent.intent_name.clone() },
            VectorError::DimensionMismatch { expected, actual, index } => {
                BatchError::DimensionMismatch {
                    intent: intent.intent_name.clone(),
                    expected,
                    actual,
                    index,
                }
            },
        })
    }

    async fn process_rows(
        &self,
        tx: &mut S::Tx,
        state: &mut BatchState,
    ) -> Result<BatchReport, BatchError> {
        let intents = tx.pending_intents().await?;
        let total = intents.len();
        tracing::info!(count = total, "found intents to process");

        let mut report = BatchReport { selected: total, ..BatchReport::default() };
        for (i, intent) in intents.iter().enumerate() {
            transition(state, BatchState::Processing { current: i + 1, total });
            tracing::info!(intent_id = intent.id, intent = %intent.intent_name, "processing intent");

            let embedding = self.intent_embedding(intent).await?;
            tx.store_embedding(intent.id, &embedding).await?;
            tracing::info!(
                intent_id = intent.id,
                dimensions = embedding.len(),
                "updated embedding in database"
            );

            report.phrases_embedded += intent.example_phrases.len();
            report.intents.push(IntentOutcome {
                id: intent.id,
                intent_name: intent.intent_name.clone(),
                phrases: intent.example_phrases.len(),
                dimensions: embedding.len(),
            });
        }
        Ok(report)
    }
}

fn transition(state: &mut BatchState, next: BatchState) {
    tracing::debug!(from = %state, to = %next, "batch state");
    *state = next;
}
