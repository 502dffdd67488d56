use thiserror::Error;

/// Failure reported by a command handler.
///
/// Only `Fatal` ends the session; the other variants produce a failure
/// response and the engine reads the next command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GtpError {
    #[error("{0}")]
    Failure(String),
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Fatal(String),
}

impl GtpError {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        Self::Fatal(message.into())
    }

    pub fn invalid_arguments() -> Self {
        Self::InvalidArguments("invalid arguments".to_string())
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Failure(message) | Self::InvalidArguments(message) | Self::Fatal(message) => {
                message
            }
        }
    }
}

pub type GtpResult = Result<String, GtpError>;

#[derive(Debug, Error, Clone)]
#[error("{code}: {message}")]
pub struct EngineError {
    pub code: String,
    pub message: String,
}

impl EngineError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
