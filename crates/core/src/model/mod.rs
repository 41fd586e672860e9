mod entry;
mod stats;

pub use entry::{EntryError, VocabularyEntry, normalize_answer, normalize_guess};
pub use stats::SessionStats;
