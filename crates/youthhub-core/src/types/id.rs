//! Newtype wrappers around SQLite integer row ids.
//!
//! Distinct types keep a `BranchId` from being passed where a `UserId` is
//! expected. Each id is `#[sqlx(transparent)]` so it binds and decodes as
//! a plain `INTEGER`, and `#[serde(transparent)]` so it is a bare number on
//! the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Macro to define a newtype ID wrapper around `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Wrap a raw row id.
            pub fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Return the raw row id.
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            /// Parse a strictly positive integer id.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().parse::<i64>() {
                    Ok(raw) if raw > 0 => Ok(Self(raw)),
                    _ => Err(AppError::validation(concat!("Invalid ", $label, " id"))),
                }
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifier of a user account (admin or superadmin).
    UserId, "user"
);

define_id!(
    /// Identifier of a branch office.
    BranchId, "branch"
);

define_id!(
    /// Identifier of a branch event.
    EventId, "event"
);
