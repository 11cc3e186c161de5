//! Typed path parameter helpers.

use std::str::FromStr;

use youthhub_core::error::AppError;

/// Parses a positive integer id from a raw path segment.
pub fn parse_id<T>(raw: &str) -> Result<T, AppError>
where
    T: FromStr<Err = AppError>,
{
    raw.parse()
}
