//! HS256 session token issue and verification.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use youthhub_core::config::AuthConfig;
use youthhub_core::error::AppError;
use youthhub_core::result::AppResult;

use super::claims::{Claims, Principal};
use super::rejection::TokenRejection;

/// Signs and verifies session tokens with a shared secret.
///
/// Verification is a pure function of the token, the secret, and the
/// clock reading passed in; nothing is cached or revoked.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_secret(config.jwt_secret.as_bytes(), config.token_ttl_seconds)
    }

    /// Creates a codec from a raw secret and a default TTL.
    pub fn from_secret(secret: &[u8], ttl_seconds: i64) -> Self {
        // Expiry is checked by hand against the caller's clock with no leeway.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_seconds,
        }
    }

    /// Issues a token for `principal` valid for the configured TTL.
    pub fn issue(&self, principal: &Principal) -> AppResult<String> {
        self.issue_at(principal, Utc::now().timestamp(), self.ttl_seconds)
    }

    /// Issues a token expiring at `now + ttl_seconds`.
    ///
    /// Deterministic for identical inputs.
    pub fn issue_at(&self, principal: &Principal, now: i64, ttl_seconds: i64) -> AppResult<String> {
        let claims = Claims::new(principal, now.saturating_add(ttl_seconds));
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))
    }

    /// Verifies a token against the system clock.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenRejection> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verifies a token at the instant `now` (seconds since epoch).
    ///
    /// The signature is checked before the body is parsed, so a tampered
    /// body is reported as [`TokenRejection::BadSignature`].
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenRejection> {
        let mut parts = token.split('.');
        let well_formed = (0..3).all(|_| parts.next().is_some_and(|p| !p.is_empty()))
            && parts.next().is_none();
        if !well_formed {
            return Err(TokenRejection::Malformed);
        }

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                JwtErrorKind::InvalidSignature => TokenRejection::BadSignature,
                JwtErrorKind::Json(_) | JwtErrorKind::MissingRequiredClaim(_) => {
                    TokenRejection::BadClaims
                }
                JwtErrorKind::ExpiredSignature => TokenRejection::Expired,
                _ => TokenRejection::Malformed,
            }
        })?;

        if data.claims.is_expired_at(now) {
            return Err(TokenRejection::Expired);
        }
        Ok(data.claims)
    }
}
