//! Site-wide landing page content.

pub mod model;

pub use model::{SiteContent, SiteContentInput};
