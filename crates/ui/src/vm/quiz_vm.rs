use speller_core::{AnswerState, QuizSession};

/// Which parts of the prompt are visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PromptMode {
    #[default]
    Source,
    Definition,
    Both,
}

impl PromptMode {
    pub const ALL: [Self; 3] = [Self::Source, Self::Definition, Self::Both];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Source => "Turkish",
            Self::Definition => "Definition",
            Self::Both => "Both",
        }
    }

    const fn shows_source(self) -> bool {
        matches!(self, Self::Source | Self::Both)
    }

    const fn shows_definition(self) -> bool {
        matches!(self, Self::Definition | Self::Both)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    None,
    Correct,
    Incorrect,
}

/// Everything the quiz card renders for the active entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizViewModel {
    pub progress_label: String,
    pub score_label: String,
    pub progress_percent: u8,
    pub source_text: Option<String>,
    pub definition: Option<String>,
    pub input: String,
    pub remaining_label: Option<String>,
    pub is_overflow: bool,
    pub hint_dots: Vec<bool>,
    pub feedback: Feedback,
    pub can_hint: bool,
    pub can_submit: bool,
}

impl QuizViewModel {
    /// Project the session onto the quiz card. `None` once the session is complete.
    #[must_use]
    pub fn project(session: &QuizSession, mode: PromptMode) -> Option<Self> {
        let entry = session.current_entry()?;
        let progress = session.progress();
        let solved = session.answer_state() == AnswerState::Correct;
        let remaining = session.remaining_characters().unwrap_or_default();
        let target_len = entry.target_len();
        let revealed = session.revealed_hint().chars().count();

        let remaining_label = (!solved).then(|| match remaining {
            1 => "1 letter".to_string(),
            n if n >= 0 => format!("{n} letters"),
            _ => "Too many characters!".to_string(),
        });
        let feedback = match session.answer_state() {
            AnswerState::Unanswered => Feedback::None,
            AnswerState::Correct => Feedback::Correct,
            AnswerState::Incorrect => Feedback::Incorrect,
        };

        Some(Self {
            progress_label: format!("Word {} / {}", progress.position + 1, progress.total),
            score_label: format!("Score: {}", session.stats().correct()),
            progress_percent: percent(progress.position, progress.total),
            source_text: mode.shows_source().then(|| entry.source_text().to_string()),
            definition: mode
                .shows_definition()
                .then(|| entry.definition().to_string()),
            input: session.input_buffer().to_string(),
            remaining_label,
            is_overflow: remaining < 0,
            hint_dots: (0..target_len).map(|idx| idx < revealed).collect(),
            feedback,
            can_hint: !solved && revealed < target_len,
            can_submit: !solved,
        })
    }
}

/// End-of-session summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionViewModel {
    pub correct_label: String,
    pub hints_label: String,
}

impl CompletionViewModel {
    #[must_use]
    pub fn project(session: &QuizSession) -> Self {
        let stats = session.stats();
        Self {
            correct_label: format!("{}/{}", stats.correct(), session.len()),
            hints_label: stats.hints_used().to_string(),
        }
    }
}

fn percent(position: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    u8::try_from(position.min(total) * 100 / total).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use speller_core::VocabularyEntry;

    use super::*;

    fn session() -> QuizSession {
        QuizSession::new(vec![
            VocabularyEntry::new("Elma", "apple", "A round fruit.").unwrap(),
            VocabularyEntry::new("Kitap", "book", "Pages with writing.").unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn fresh_entry_projection() {
        let vm = QuizViewModel::project(&session(), PromptMode::Source).unwrap();

        assert_eq!(vm.progress_label, "Word 1 / 2");
        assert_eq!(vm.score_label, "Score: 0");
        assert_eq!(vm.progress_percent, 0);
        assert_eq!(vm.source_text.as_deref(), Some("Elma"));
        assert_eq!(vm.definition, None);
        assert_eq!(vm.remaining_label.as_deref(), Some("5 letters"));
        assert_eq!(vm.hint_dots, vec![false; 5]);
        assert_eq!(vm.feedback, Feedback::None);
        assert!(vm.can_hint);
        assert!(vm.can_submit);
    }

    #[test]
    fn prompt_mode_controls_visible_parts() {
        let session = session();

        let definition = QuizViewModel::project(&session, PromptMode::Definition).unwrap();
        assert_eq!(definition.source_text, None);
        assert_eq!(definition.definition.as_deref(), Some("A round fruit."));

        let both = QuizViewModel::project(&session, PromptMode::Both).unwrap();
        assert!(both.source_text.is_some());
        assert!(both.definition.is_some());
    }

    #[test]
    fn overflow_is_flagged() {
        let mut session = session();
        session.set_input("apples!");

        let vm = QuizViewModel::project(&session, PromptMode::Source).unwrap();

        assert!(vm.is_overflow);
        assert_eq!(vm.remaining_label.as_deref(), Some("Too many characters!"));
    }

    #[test]
    fn hints_light_up_dots() {
        let mut session = session();
        session.request_hint();
        session.request_hint();

        let vm = QuizViewModel::project(&session, PromptMode::Source).unwrap();

        assert_eq!(vm.input, "ap");
        assert_eq!(vm.hint_dots, vec![true, true, false, false, false]);
        assert_eq!(vm.remaining_label.as_deref(), Some("3 letters"));
    }

    #[test]
    fn fully_hinted_entry_disables_hint() {
        let mut session = session();
        for _ in 0..5 {
            session.request_hint();
        }

        let vm = QuizViewModel::project(&session, PromptMode::Source).unwrap();

        assert_eq!(vm.hint_dots, vec![true; 5]);
        assert_eq!(vm.remaining_label.as_deref(), Some("0 letters"));
        assert!(!vm.can_hint);
        assert!(vm.can_submit);
    }

    #[test]
    fn solved_entry_disables_controls() {
        let mut session = session();
        session.submit_answer("apple");

        let vm = QuizViewModel::project(&session, PromptMode::Source).unwrap();

        assert_eq!(vm.feedback, Feedback::Correct);
        assert_eq!(vm.remaining_label, None);
        assert!(!vm.can_hint);
        assert!(!vm.can_submit);
        assert_eq!(vm.score_label, "Score: 1");
    }

    #[test]
    fn completed_session_projects_summary() {
        let mut session = session();
        session.request_hint();
        session.submit_answer("apple");
        session.advance();
        session.advance();

        assert!(QuizViewModel::project(&session, PromptMode::Source).is_none());
        let summary = CompletionViewModel::project(&session);
        assert_eq!(summary.correct_label, "1/2");
        assert_eq!(summary.hints_label, "1");
    }

    #[test]
    fn percent_tracks_position() {
        assert_eq!(percent(1, 2), 50);
        assert_eq!(percent(3, 3), 100);
        assert_eq!(percent(0, 0), 0);
    }
}
