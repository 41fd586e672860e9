#![forbid(unsafe_code)]

pub mod model;
pub mod quiz;

pub use model::{EntryError, SessionStats, VocabularyEntry};
pub use quiz::{AdvanceOutcome, AnswerState, QuizError, QuizProgress, QuizSession, SubmitOutcome};
