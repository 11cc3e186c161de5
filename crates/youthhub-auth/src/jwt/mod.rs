//! Session token claims, issuing, and verification.

pub mod claims;
pub mod codec;
pub mod rejection;

pub use claims::{Claims, Principal};
pub use codec::TokenCodec;
pub use rejection::TokenRejection;
