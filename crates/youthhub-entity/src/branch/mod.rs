//! Branch office entities.

pub mod model;

pub use model::{Branch, BranchContact, BranchInput, BranchRelations, BranchSummary, SocialLinks};
