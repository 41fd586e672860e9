use std::env;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::error::ConfigError;
use crate::generation::ChatCompletionsGenerator;
use crate::words::{LocalWordSource, RemoteWordSource, WordCriteria, WordSource};

/// Which `WordSource` strategy backs the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordSourceKind {
    #[default]
    Local,
    Remote,
}

impl FromStr for WordSourceKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            _ => Err(ConfigError::UnknownSource(value.to_string())),
        }
    }
}

/// Runtime settings resolved by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub source: WordSourceKind,
    pub session_size: usize,
    /// Artificial delay for the local source so the loading state shows.
    pub local_delay: Duration,
}

/// Values supplied on the command line. A set field wins over the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub source: Option<WordSourceKind>,
    pub session_size: Option<usize>,
}

impl AppConfig {
    pub const DEFAULT_SESSION_SIZE: usize = 10;
    pub const DEFAULT_LOCAL_DELAY: Duration = Duration::from_millis(600);

    pub const SOURCE_VAR: &'static str = "SPELLER_WORD_SOURCE";
    pub const SESSION_SIZE_VAR: &'static str = "SPELLER_SESSION_SIZE";

    /// Read `SPELLER_WORD_SOURCE` and `SPELLER_SESSION_SIZE` for every field
    /// `overrides` leaves unset, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable that is actually consulted holds an
    /// invalid value.
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an explicit variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a consulted value is invalid.
    pub fn resolve(
        overrides: ConfigOverrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.source = match overrides.source {
            Some(source) => source,
            None => match lookup(Self::SOURCE_VAR) {
                Some(value) => value.parse()?,
                None => config.source,
            },
        };
        config.session_size = match overrides.session_size {
            Some(size) => size,
            None => match lookup(Self::SESSION_SIZE_VAR) {
                Some(value) => parse_session_size(&value)?,
                None => config.session_size,
            },
        };
        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: WordSourceKind::Local,
            session_size: Self::DEFAULT_SESSION_SIZE,
            local_delay: Self::DEFAULT_LOCAL_DELAY,
        }
    }
}

/// Parse a positive session size.
///
/// # Errors
///
/// Returns `ConfigError::InvalidSessionSize` for zero or non-numeric input.
pub fn parse_session_size(raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|size| *size > 0)
        .ok_or_else(|| ConfigError::InvalidSessionSize(raw.to_string()))
}

/// Assembles the services the UI needs.
#[derive(Clone)]
pub struct AppServices {
    word_source: Arc<dyn WordSource>,
    session_size: usize,
}

impl AppServices {
    /// Build services for the given configuration.
    ///
    /// The remote strategy reads its credentials from the environment; without
    /// them every fetch degrades to the fallback list.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let word_source: Arc<dyn WordSource> = match config.source {
            WordSourceKind::Local => {
                Arc::new(LocalWordSource::new().with_delay(config.local_delay))
            }
            WordSourceKind::Remote => {
                let generator = ChatCompletionsGenerator::from_env();
                if !generator.enabled() {
                    tracing::warn!("SPELLER_AI_API_KEY is not set; remote source will use fallback words");
                }
                Arc::new(RemoteWordSource::new(
                    Arc::new(generator),
                    WordCriteria::from_env(),
                ))
            }
        };
        Self::with_word_source(word_source, config.session_size)
    }

    #[must_use]
    pub fn with_word_source(word_source: Arc<dyn WordSource>, session_size: usize) -> Self {
        Self {
            word_source,
            session_size,
        }
    }

    #[must_use]
    pub fn word_source(&self) -> Arc<dyn WordSource> {
        Arc::clone(&self.word_source)
    }

    #[must_use]
    pub fn session_size(&self) -> usize {
        self.session_size
    }
}
