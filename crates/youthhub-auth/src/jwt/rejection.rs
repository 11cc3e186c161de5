//! Typed token rejection reasons.

use thiserror::Error;

use youthhub_core::error::AppError;

/// Why a token failed verification.
///
/// The variants exist for logging and tests; callers outside this crate see
/// one generic unauthorized error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenRejection {
    /// Not three non-empty dot-separated base64url segments.
    #[error("token is malformed")]
    Malformed,
    /// The HMAC does not match the header and body.
    #[error("token signature does not match")]
    BadSignature,
    /// The body is not a well-formed claims record.
    #[error("token claims are invalid")]
    BadClaims,
    /// The expiry instant has passed.
    #[error("token has expired")]
    Expired,
}

impl From<TokenRejection> for AppError {
    fn from(_: TokenRejection) -> Self {
        AppError::unauthorized("Invalid token")
    }
}
