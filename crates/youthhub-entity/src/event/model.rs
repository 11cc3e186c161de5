//! Event entity model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use youthhub_core::types::{BranchId, EventId, UserId};

/// An event published by a branch.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// Owning branch.
    pub branch_id: BranchId,
    /// Event title.
    pub title: String,
    /// Poster image URL.
    pub image_url: String,
    /// Announcement body text.
    pub announcement: String,
    /// Event date (`YYYY-MM-DD`, optionally followed by a time).
    pub event_date: String,
    /// Venue.
    pub location: String,
    /// Account that created the event. Audit only.
    pub created_by: Option<UserId>,
    /// When the event was created.
    pub created_at: NaiveDateTime,
    /// When the event was last updated.
    pub updated_at: NaiveDateTime,
}

/// An event joined with the name and governorate of its branch.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventWithBranch {
    /// The event row.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub event: Event,
    /// Name of the owning branch.
    pub branch_name: String,
    /// Governorate of the owning branch.
    pub branch_governorate: String,
}

/// Event fields supplied on create and update.
#[derive(Debug, Clone)]
pub struct EventInput {
    /// Event title.
    pub title: String,
    /// Poster image URL.
    pub image_url: String,
    /// Announcement body text.
    pub announcement: String,
    /// Event date.
    pub event_date: String,
    /// Venue.
    pub location: String,
}

/// Filters for event listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Restrict to one branch.
    pub branch_id: Option<BranchId>,
    /// Calendar month (1-12) of `event_date`.
    pub month: Option<u32>,
    /// Calendar year of `event_date`.
    pub year: Option<i32>,
}
