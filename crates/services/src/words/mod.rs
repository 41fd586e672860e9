mod catalog;
mod local;
mod remote;

use std::collections::HashSet;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use speller_core::VocabularyEntry;

use crate::error::WordSourceError;

pub use catalog::{fallback_entries, local_entries};
pub use local::LocalWordSource;
pub use remote::{RemoteWordSource, WordCriteria};

/// Supplies the entries for one quiz session.
///
/// Implementations return at most `count` entries in random order, without
/// duplicate answers when the backing list has enough distinct items.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Fetch up to `count` entries for a new session.
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::InvalidCount` for `count == 0`, or
    /// `WordSourceError::Unavailable` when no entries can be produced.
    async fn fetch_session(&self, count: usize) -> Result<Vec<VocabularyEntry>, WordSourceError>;
}

/// Shuffle a copy of `items` and keep the first `count`.
///
/// A fixed `seed` makes the result reproducible.
pub(crate) fn shuffle_take(
    items: &[VocabularyEntry],
    count: usize,
    seed: Option<u64>,
) -> Vec<VocabularyEntry> {
    let mut pool = dedupe_by_target(items.to_vec());
    match seed {
        Some(seed) => pool.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => pool.shuffle(&mut rand::rng()),
    }
    pool.truncate(count);
    pool
}

/// Drop entries whose answer already appeared, keeping first occurrences.
pub(crate) fn dedupe_by_target(entries: Vec<VocabularyEntry>) -> Vec<VocabularyEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.target_text().to_string()))
        .collect()
}
