//! Error taxonomy shared by the collector, the OpenWeather client and the
//! retry session.

use reqwest::StatusCode;
use thiserror::Error;

use crate::{input::Field, model::LocationQuery};

/// A single location field failed one of its rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} cannot be empty.", .0.label())]
    Blank(Field),

    #[error("Valid {} codes are 2 characters.", .0.label().to_lowercase())]
    WrongLength(Field),

    #[error("{} cannot be numeric.", .0.label())]
    Numeric(Field),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Blank(f) | ValidationError::WrongLength(f) | ValidationError::Numeric(f) => *f,
        }
    }
}

/// The input source could not deliver another line.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The user backed out of the prompt (Esc / Ctrl-C).
    #[error("input cancelled by user")]
    Cancelled,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// A 200 response whose body does not have the expected shape.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unexpected weather payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("weather payload contained no condition entries")]
    EmptyWeather,
}

/// Coarse classification of a failed fetch, used by the harness to pick a remedy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    ValidationRejected,
    AuthRejected,
    ServiceRejected,
    TransportError,
    DecodeError,
}

/// One fetch attempt against the weather service failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(
        "Invalid query: City ({}), state ({}), or country ({}) is incorrect",
        .query.city(), .query.state(), .query.country()
    )]
    LocationNotFound { query: LocationQuery },

    #[error("Invalid API key: check your configuration")]
    AuthRejected,

    #[error("Query issue (HTTP {status}): contact provider")]
    ServiceRejected { status: StatusCode },

    #[error("Error fetching weather data: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response from weather service: {0}")]
    Decode(#[from] ParseError),
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::LocationNotFound { .. } => FetchErrorKind::ValidationRejected,
            FetchError::AuthRejected => FetchErrorKind::AuthRejected,
            FetchError::ServiceRejected { .. } => FetchErrorKind::ServiceRejected,
            FetchError::Transport(_) => FetchErrorKind::TransportError,
            FetchError::Decode(_) => FetchErrorKind::DecodeError,
        }
    }
}

/// Outcome of a collect → fetch session that did not produce a report.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] PromptError),

    /// The remedy policy chose not to retry this failure.
    #[error(transparent)]
    Aborted(#[from] FetchError),
}

impl SessionError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SessionError::Input(PromptError::Cancelled))
    }
}
