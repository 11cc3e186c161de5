//! Branch event entities.

pub mod model;

pub use model::{Event, EventFilter, EventInput, EventWithBranch};
