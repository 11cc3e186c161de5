//! Repository implementations for all YouthHub tables.

pub mod branch;
pub mod content;
pub mod event;
pub mod user;

pub use branch::BranchRepository;
pub use content::ContentRepository;
pub use event::EventRepository;
pub use user::UserRepository;
