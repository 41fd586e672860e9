use services::WordSourceError;
use speller_core::{AdvanceOutcome, QuizSession, VocabularyEntry};

use crate::views::{ViewError, ViewState};

/// Generation token for one word fetch.
///
/// Results carrying an outdated ticket belong to a fetch the user has since
/// abandoned and are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellStatus {
    Idle,
    Loading,
    Playing,
    Complete,
    Error(ViewError),
}

/// Top-level game state: idle, loading words, playing, finished or failed.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellVm {
    state: ViewState<QuizSession>,
    generation: u64,
}

impl ShellVm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
            generation: 0,
        }
    }

    /// A shell already playing `session`.
    #[must_use]
    pub fn playing(session: QuizSession) -> Self {
        Self {
            state: ViewState::Ready(session),
            generation: 0,
        }
    }

    #[must_use]
    pub fn status(&self) -> ShellStatus {
        match &self.state {
            ViewState::Idle => ShellStatus::Idle,
            ViewState::Loading => ShellStatus::Loading,
            ViewState::Ready(session) if session.is_complete() => ShellStatus::Complete,
            ViewState::Ready(_) => ShellStatus::Playing,
            ViewState::Error(err) => ShellStatus::Error(*err),
        }
    }

    /// Ticket of the most recent fetch, which also identifies the session it produced.
    #[must_use]
    pub fn current_ticket(&self) -> FetchTicket {
        FetchTicket(self.generation)
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        match &self.state {
            ViewState::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut QuizSession> {
        match &mut self.state {
            ViewState::Ready(session) => Some(session),
            _ => None,
        }
    }

    /// Enter the loading state and hand out a ticket for the new fetch.
    ///
    /// Returns `None` while another fetch is outstanding.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if matches!(self.state, ViewState::Loading) {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.state = ViewState::Loading;
        Some(self.current_ticket())
    }

    /// Apply a fetch result. Returns false if the ticket is stale.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<VocabularyEntry>, WordSourceError>,
    ) -> bool {
        if ticket != self.current_ticket() || !matches!(self.state, ViewState::Loading) {
            tracing::debug!(?ticket, "discarding stale word fetch");
            return false;
        }

        self.state = match result {
            Ok(entries) => match QuizSession::new(entries) {
                Ok(session) => ViewState::Ready(session),
                Err(_) => ViewState::Error(ViewError::EmptySession),
            },
            Err(err) => {
                tracing::warn!(error = %err, "word fetch failed");
                ViewState::Error(ViewError::from(&err))
            }
        };
        true
    }

    /// Abandon the current fetch or session and return to idle.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = ViewState::Idle;
    }

    /// Delayed advance after a correct answer.
    ///
    /// Does nothing if the session was replaced or has moved on since `index`
    /// was solved.
    pub fn advance_after_success(
        &mut self,
        ticket: FetchTicket,
        index: usize,
    ) -> Option<AdvanceOutcome> {
        if ticket != self.current_ticket() {
            return None;
        }
        self.session_mut()?.advance_after_success(index)
    }
}

impl Default for ShellVm {
    fn default() -> Self {
        Self::new()
    }
}
