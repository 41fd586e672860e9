#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod generation;
pub mod words;

pub use app_services::{
    AppConfig, AppServices, ConfigOverrides, WordSourceKind, parse_session_size,
};
pub use error::{ConfigError, GenerationError, WordSourceError};
pub use generation::{ChatCompletionsGenerator, GenerationConfig, TextGenerator};
pub use words::{LocalWordSource, RemoteWordSource, WordCriteria, WordSource};
