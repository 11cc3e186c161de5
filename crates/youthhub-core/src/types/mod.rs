//! Core type definitions used across the YouthHub workspace.

pub mod id;

pub use id::*;
