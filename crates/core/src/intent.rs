use serde::{Deserialize, Serialize};

/// A dense embedding as produced by the inference model.
pub type Embedding = Vec<f32>;

/// A full row of `intent_embeddings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentRecord {
    pub id: i64,
    pub intent_name: String,
    pub example_phrases: Vec<String>,
    pub embedding: Option<Embedding>,
    pub enabled: bool,
}

impl IntentRecord {
    /// Whether a batch run picks this row up.
    ///
    /// Rows without an embedding are always selected. Enabled rows are
    /// selected even when they already have one, so every run refreshes them.
    #[must_use]
    pub const fn needs_embedding(&self) -> bool {
        self.embedding.is_none() || self.enabled
    }

    #[must_use]
    pub fn to_pending(&self) -> PendingIntent {
        PendingIntent {
            id: self.id,
            intent_name: self.intent_name.clone(),
            example_phrases: self.example_phrases.clone(),
        }
    }
}

/// The columns a batch run reads for each selected row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingIntent {
    pub id: i64,
    pub intent_name: String,
    pub example_phrases: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(embedding: Option<Embedding>, enabled: bool) -> IntentRecord {
        IntentRecord {
            id: 1,
            intent_name: "consultar_tasa".to_owned(),
            example_phrases: vec!["tasa de cambio".to_owned()],
            embedding,
            enabled,
        }
    }

    #[test]
    fn test_missing_embedding_is_selected() {
        assert!(record(None, false).needs_embedding());
        assert!(record(None, true).needs_embedding());
    }

    #[test]
    fn test_enabled_row_is_refreshed() {
        assert!(record(Some(vec![0.5, 0.5]), true).needs_embedding());
    }

    #[test]
    fn test_disabled_row_with_embedding_is_skipped() {
        assert!(!record(Some(vec![0.5, 0.5]), false).needs_embedding());
    }

    #[test]
    fn test_to_pending_keeps_phrase_order() {
        let mut rec = record(None, true);
        rec.example_phrases = vec!["b".to_owned(), "a".to_owned()];
        let pending = rec.to_pending();
        assert_eq!(pending.id, 1);
        assert_eq!(pending.example_phrases, vec!["b", "a"]);
    }
}
