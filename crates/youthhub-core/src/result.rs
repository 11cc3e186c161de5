//! Convenience result type alias for YouthHub.

use crate::error::AppError;

/// A specialized `Result` type for YouthHub operations.
pub type AppResult<T> = Result<T, AppError>;
