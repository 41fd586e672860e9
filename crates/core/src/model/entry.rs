use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── NORMALIZATION ─────────────────────────────────────────────────────────────
//

/// Canonical answer key for a raw translation.
///
/// Trims, lower-cases and strips any leading `to ` infinitive marker. The marker
/// is stripped repeatedly, so normalizing an already normalized value is a no-op.
#[must_use]
pub fn normalize_answer(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut rest = lowered.as_str();
    while let Some(after) = rest.strip_prefix("to") {
        if !after.starts_with(char::is_whitespace) {
            break;
        }
        rest = after.trim_start();
    }
    rest.to_string()
}

/// Normalizes a typed guess before comparison (trim + lower-case).
#[must_use]
pub fn normalize_guess(raw: &str) -> String {
    raw.trim().to_lowercase()
}

//
// ─── ENTRY ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntryError {
    #[error("target text is empty after normalization")]
    EmptyTarget,
}

/// One quiz prompt: a source word, its translation and a short definition.
///
/// `target_text` is normalized once at construction and is the answer key for
/// the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabularyEntry {
    source_text: String,
    target_text: String,
    definition: String,
}

impl VocabularyEntry {
    /// Build an entry, normalizing the target translation.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::EmptyTarget` if nothing is left of the target after
    /// normalization.
    pub fn new(
        source_text: impl Into<String>,
        target_text: impl AsRef<str>,
        definition: impl Into<String>,
    ) -> Result<Self, EntryError> {
        let target_text = normalize_answer(target_text.as_ref());
        if target_text.is_empty() {
            return Err(EntryError::EmptyTarget);
        }

        Ok(Self {
            source_text: source_text.into().trim().to_string(),
            target_text,
            definition: definition.into().trim().to_string(),
        })
    }

    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    #[must_use]
    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Length of the answer key in characters.
    #[must_use]
    pub fn target_len(&self) -> usize {
        self.target_text.chars().count()
    }

    /// True if the guess matches the answer key after normalization.
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        normalize_guess(guess) == self.target_text
    }

    /// The first `count` characters of the answer key.
    #[must_use]
    pub fn target_prefix(&self, count: usize) -> String {
        self.target_text.chars().take(count).collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
