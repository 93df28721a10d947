//! Error taxonomy shared by the store, the service and the GraphQL boundary.

use thiserror::Error;

/// Wire-level error codes, surfaced to callers as `extensions.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidInput,
    NotFound,
    DuplicateEmail,
    InternalServerError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::NotFound => "NOT_FOUND",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

#[derive(Error, Debug)]
pub enum EventError {
    /// Malformed, missing or out-of-range field.
    #[error("{0}")]
    InvalidInput(String),

    /// Referenced event or attendee does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Insertion would give two attendees of one event the same email.
    #[error("{0}")]
    DuplicateEmail(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl EventError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::DuplicateEmail(_) => ErrorCode::DuplicateEmail,
            Self::Internal(_) => ErrorCode::InternalServerError,
        }
    }
}

pub type EventResult<T> = std::result::Result<T, EventError>;
