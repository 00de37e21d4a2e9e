use thiserror::Error;

/// Errors surfaced by a conversational backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend session could not be created. Fatal to the adapter that
    /// asked for it; the caller has to build a new one.
    #[error("backend session could not be created: {message}")]
    Construction { message: String },

    /// A single request/response round-trip failed.
    #[error("backend request failed: {0}")]
    Request(#[from] RequestFailure),
}

impl BackendError {
    pub fn construction(message: impl Into<String>) -> Self {
        BackendError::Construction {
            message: message.into(),
        }
    }
}

/// Why a round-trip failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestFailure {
    #[error("authentication failed")]
    Authentication,

    #[error("rate limited")]
    RateLimited,

    #[error("network error: {0}")]
    Network(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("provider returned no content")]
    EmptyResponse,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors from building a [`crate::reply::Scale`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    #[error("scale value {0} is outside 1..=10")]
    OutOfRange(u8),

    #[error("scale value '{0}' is not a number")]
    NotANumber(String),
}

/// An unknown reply style label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reply style: '{0}'")]
pub struct StyleParseError(pub String);

/// Errors from loading an explicitly requested configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}
