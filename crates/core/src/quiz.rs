use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{SessionStats, VocabularyEntry};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no entries available for session")]
    Empty,
}

//
// ─── STATES & OUTCOMES ─────────────────────────────────────────────────────────
//

/// Answer state of the active entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerState {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

/// Result of `QuizSession::submit_answer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, an already solved entry, or a completed session.
    Ignored,
    Correct,
    Incorrect,
}

/// Result of `QuizSession::advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Next,
    Completed,
}

/// Aggregated view of session progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// Zero-based index of the active entry; equals `total` once complete.
    pub position: usize,
    pub total: usize,
    pub is_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One spelling run through a fixed, ordered list of entries.
///
/// All operations are total: invalid requests (blank guesses, hints past the
/// full answer, advancing a finished session) are silent no-ops.
#[derive(Clone, PartialEq, Eq)]
pub struct QuizSession {
    entries: Vec<VocabularyEntry>,
    current: usize,
    input: String,
    hint_level: usize,
    state: AnswerState,
    stats: SessionStats,
    revision: u64,
}

impl QuizSession {
    /// Start a session over the given entries.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if `entries` is empty.
    pub fn new(entries: Vec<VocabularyEntry>) -> Result<Self, QuizError> {
        if entries.is_empty() {
            return Err(QuizError::Empty);
        }

        Ok(Self {
            entries,
            current: 0,
            input: String::new(),
            hint_level: 0,
            state: AnswerState::Unanswered,
            stats: SessionStats::new(),
            revision: 0,
        })
    }

    /// Number of entries in the session.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; sessions are never built without entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_entry(&self) -> Option<&VocabularyEntry> {
        self.entries.get(self.current)
    }

    #[must_use]
    pub fn input_buffer(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn hint_level(&self) -> usize {
        self.hint_level
    }

    #[must_use]
    pub fn answer_state(&self) -> AnswerState {
        self.state
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.entries.len()
    }

    /// Bumped on every observable change; shells can poll it to re-render.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            position: self.current,
            total: self.entries.len(),
            is_complete: self.is_complete(),
        }
    }

    /// Answer characters revealed so far by hints.
    #[must_use]
    pub fn revealed_hint(&self) -> String {
        self.current_entry()
            .map(|entry| entry.target_prefix(self.hint_level))
            .unwrap_or_default()
    }

    /// Answer length minus typed length, in characters.
    ///
    /// Negative when the user typed more than the answer holds. `None` once the
    /// session is complete.
    #[must_use]
    pub fn remaining_characters(&self) -> Option<i64> {
        let entry = self.current_entry()?;
        let target = i64::try_from(entry.target_len()).unwrap_or(i64::MAX);
        let typed = i64::try_from(self.input.chars().count()).unwrap_or(i64::MAX);
        Some(target - typed)
    }

    #[must_use]
    pub fn is_overflow(&self) -> bool {
        self.remaining_characters().is_some_and(|remaining| remaining < 0)
    }

    /// Replace the input buffer as the user types.
    ///
    /// Clears an `Incorrect` flash. Ignored once the entry is solved.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.is_complete() || self.state == AnswerState::Correct {
            return;
        }
        self.input = text.into();
        if self.state == AnswerState::Incorrect {
            self.state = AnswerState::Unanswered;
        }
        self.touch();
    }

    /// Check `text` against the active entry.
    pub fn submit_answer(&mut self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() || self.state == AnswerState::Correct {
            return SubmitOutcome::Ignored;
        }
        let Some(entry) = self.entries.get(self.current) else {
            return SubmitOutcome::Ignored;
        };
        let matched = entry.matches(text);

        if self.input != text {
            self.input = text.to_string();
        }
        self.touch();

        if matched {
            self.state = AnswerState::Correct;
            self.stats.record_correct();
            SubmitOutcome::Correct
        } else {
            self.state = AnswerState::Incorrect;
            SubmitOutcome::Incorrect
        }
    }

    /// Check the current input buffer.
    pub fn submit_current(&mut self) -> SubmitOutcome {
        let text = self.input.clone();
        self.submit_answer(&text)
    }

    /// Reveal one more character of the answer and pre-fill the input with it.
    ///
    /// Returns false when nothing was revealed.
    pub fn request_hint(&mut self) -> bool {
        if self.state == AnswerState::Correct {
            return false;
        }
        let Some(entry) = self.entries.get(self.current) else {
            return false;
        };
        if self.hint_level >= entry.target_len() {
            return false;
        }

        self.hint_level += 1;
        self.input = entry.target_prefix(self.hint_level);
        self.stats.record_hint();
        if self.state == AnswerState::Incorrect {
            self.state = AnswerState::Unanswered;
        }
        self.touch();
        true
    }

    /// Move to the next entry, or complete the session after the last one.
    ///
    /// Advancing an unsolved entry is a skip and leaves the stats untouched.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.is_complete() {
            return AdvanceOutcome::Completed;
        }

        self.current += 1;
        self.input.clear();
        self.hint_level = 0;
        self.state = AnswerState::Unanswered;
        self.touch();

        if self.is_complete() {
            AdvanceOutcome::Completed
        } else {
            AdvanceOutcome::Next
        }
    }

    /// Advance only if entry `index` is still active and solved.
    ///
    /// Returns `None` when the request is stale.
    pub fn advance_after_success(&mut self, index: usize) -> Option<AdvanceOutcome> {
        if self.current != index || self.state != AnswerState::Correct {
            return None;
        }
        Some(self.advance())
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("entries_len", &self.entries.len())
            .field("current", &self.current)
            .field("hint_level", &self.hint_level)
            .field("state", &self.state)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
