//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by text generators.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("word generation is not configured")]
    Disabled,
    #[error("word generation returned an empty response")]
    EmptyResponse,
    #[error("word generation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("word generation returned malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors emitted by `WordSource` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WordSourceError {
    #[error("session size must be at least 1")]
    InvalidCount,
    #[error("no vocabulary entries available")]
    Unavailable,
}

/// Errors emitted while reading configuration from the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("unknown word source: {0} (expected `local` or `remote`)")]
    UnknownSource(String),
    #[error("invalid session size: {0} (expected a positive integer)")]
    InvalidSessionSize(String),
}
