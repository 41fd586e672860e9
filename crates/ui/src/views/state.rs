use services::WordSourceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    EmptySession,
    SourceUnavailable,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Unknown => "Something went wrong. Please try again.",
            Self::EmptySession => "No words were returned for this session. Please try again.",
            Self::SourceUnavailable => {
                "An error occurred while loading the words. Please try again."
            }
        }
    }
}

impl From<&WordSourceError> for ViewError {
    fn from(err: &WordSourceError) -> Self {
        match err {
            WordSourceError::Unavailable => Self::SourceUnavailable,
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}
