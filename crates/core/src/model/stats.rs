use serde::{Deserialize, Serialize};

/// Running statistics for a quiz session.
///
/// `answered` counts entries completed through a correct answer; skipped
/// entries are never counted. `correct <= answered` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    correct: u32,
    answered: u32,
    hints_used: u32,
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn answered(&self) -> u32 {
        self.answered
    }

    #[must_use]
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub(crate) fn record_correct(&mut self) {
        self.correct = self.correct.saturating_add(1);
        self.answered = self.answered.saturating_add(1);
    }

    pub(crate) fn record_hint(&mut self) {
        self.hints_used = self.hints_used.saturating_add(1);
    }
}
