use std::time::Duration;

use async_trait::async_trait;
use speller_core::VocabularyEntry;

use super::{WordSource, catalog, shuffle_take};
use crate::error::WordSourceError;

/// Serves a shuffled slice of a fixed in-memory list.
#[derive(Clone, Debug)]
pub struct LocalWordSource {
    entries: Vec<VocabularyEntry>,
    seed: Option<u64>,
    delay: Duration,
}

impl LocalWordSource {
    /// Source backed by the built-in vocabulary list.
    #[must_use]
    pub fn new() -> Self {
        Self::with_entries(catalog::local_entries())
    }

    #[must_use]
    pub fn with_entries(entries: Vec<VocabularyEntry>) -> Self {
        Self {
            entries,
            seed: None,
            delay: Duration::ZERO,
        }
    }

    /// Use a fixed shuffle seed so every fetch returns the same slice.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Wait before resolving so the loading state is visible.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for LocalWordSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WordSource for LocalWordSource {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn fetch_session(&self, count: usize) -> Result<Vec<VocabularyEntry>, WordSourceError> {
        if count == 0 {
            return Err(WordSourceError::InvalidCount);
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let entries = shuffle_take(&self.entries, count, self.seed);
        if entries.is_empty() {
            return Err(WordSourceError::Unavailable);
        }

        tracing::info!(source = self.name(), count = entries.len(), "fetched vocabulary session");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn fifty_entries() -> Vec<VocabularyEntry> {
        (0..50)
            .map(|i| {
                let target = if i % 5 == 0 {
                    format!("To Verb{i}")
                } else {
                    format!("word{i}")
                };
                VocabularyEntry::new(format!("Kelime{i}"), target, "A word.").unwrap()
            })
            .collect()
    }

    #[tokio::test]
    async fn returns_requested_count_of_distinct_normalized_entries() {
        let source = LocalWordSource::with_entries(fifty_entries());

        let entries = source.fetch_session(10).await.unwrap();

        assert_eq!(entries.len(), 10);
        let targets: HashSet<_> = entries.iter().map(VocabularyEntry::target_text).collect();
        assert_eq!(targets.len(), 10);
        for entry in &entries {
            assert!(!entry.target_text().is_empty());
            assert!(!entry.target_text().starts_with("to "));
        }
    }

    #[tokio::test]
    async fn returns_fewer_when_list_is_short() {
        let source = LocalWordSource::with_entries(fifty_entries().into_iter().take(3).collect());

        let entries = source.fetch_session(10).await.unwrap();

        assert_eq!(entries.len(), 3);
    }

    #[tokio::test]
    async fn zero_count_is_rejected() {
        let err = LocalWordSource::new().fetch_session(0).await.unwrap_err();
        assert!(matches!(err, WordSourceError::InvalidCount));
    }

    #[tokio::test]
    async fn empty_list_is_unavailable() {
        let err = LocalWordSource::with_entries(Vec::new())
            .fetch_session(10)
            .await
            .unwrap_err();
        assert!(matches!(err, WordSourceError::Unavailable));
    }

    #[tokio::test]
    async fn seeded_source_is_deterministic() {
        let source = LocalWordSource::new().with_seed(42);

        let first = source.fetch_session(10).await.unwrap();
        let second = source.fetch_session(10).await.unwrap();

        assert_eq!(first, second);
    }
}
