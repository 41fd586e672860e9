mod quiz_vm;
mod shell_vm;

pub use quiz_vm::{CompletionViewModel, Feedback, PromptMode, QuizViewModel};
pub use shell_vm::{FetchTicket, ShellStatus, ShellVm};
