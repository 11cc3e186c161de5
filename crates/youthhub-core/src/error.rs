//! Error type shared by every YouthHub crate.
//!
//! Failures are folded into [`AppError`] at the point they occur; the HTTP
//! layer picks a status from the [`ErrorKind`] and decides whether the
//! message may be shown to the caller.

use std::fmt;
use thiserror::Error;

/// What went wrong, independent of how it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// No row or object with the given id or key.
    NotFound,
    /// Missing, forged, or expired session token; bad credentials.
    Authentication,
    /// Valid token whose role is not allowed here.
    Authorization,
    /// Malformed or incomplete input.
    Validation,
    /// Duplicate username, or a branch that is still referenced.
    Conflict,
    Internal,
    Database,
    Storage,
    Configuration,
    Serialization,
}

impl ErrorKind {
    /// Stable machine-readable code reported in API error bodies.
    pub fn code(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Authentication => "UNAUTHORIZED",
            Self::Authorization => "FORBIDDEN",
            Self::Validation => "BAD_REQUEST",
            Self::Conflict => "CONFLICT",
            Self::Internal => "INTERNAL",
            Self::Database => "DATABASE",
            Self::Storage => "STORAGE",
            Self::Configuration => "CONFIGURATION",
            Self::Serialization => "SERIALIZATION",
        }
    }

    /// Caused by the request rather than the server; the message is safe to
    /// return verbatim.
    pub fn is_client_error(self) -> bool {
        matches!(
            self,
            Self::NotFound
                | Self::Authentication
                | Self::Authorization
                | Self::Validation
                | Self::Conflict
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An error with a kind, a message, optional structured details, and the
/// underlying cause when there is one.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
    /// Extra JSON returned alongside client errors, e.g. relation counts.
    pub details: Option<serde_json::Value>,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
            source: None,
        }
    }

    /// Wraps a lower-level failure; the cause is kept for logging only.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            source: Some(Box::new(source)),
            ..Self::new(kind, message)
        }
    }

    pub fn with_details(self, details: serde_json::Value) -> Self {
        Self {
            details: Some(details),
            ..self
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Maps to 401.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// Maps to 403.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, message)
    }

    /// Maps to 400.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Whether the message may be shown to API callers.
    pub fn is_client_error(&self) -> bool {
        self.kind.is_client_error()
    }
}

// The boxed cause is not cloneable; a clone keeps everything else.
impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            details: self.details.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        let message = format!("Invalid JSON: {err}");
        Self::with_source(ErrorKind::Serialization, message, err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let message = format!("Storage I/O failed: {err}");
        Self::with_source(ErrorKind::Storage, message, err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        let message = format!("Invalid configuration: {err}");
        Self::with_source(ErrorKind::Configuration, message, err)
    }
}
