mod complete;
pub(crate) mod home;
mod quiz;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use complete::CompletionPanel;
pub use home::{HomeView, ShellPanel};
pub use quiz::QuizPanel;
pub use state::{ViewError, ViewState};
