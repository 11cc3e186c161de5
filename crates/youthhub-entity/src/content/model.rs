//! Site content model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single row of landing-page copy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SiteContent {
    /// Organization name shown in the header.
    pub organization_name: String,
    /// Tagline.
    pub slogan: String,
    /// "Who we are" paragraph.
    pub definition_text: String,
    /// Vision statement.
    pub vision_text: String,
    /// Mission statement.
    pub mission_text: String,
    /// Goals, one per line.
    pub goals_text: String,
    /// Link to the volunteer sign-up form.
    pub volunteer_form_url: String,
    /// When the content was last edited.
    pub updated_at: NaiveDateTime,
}

/// Replacement site content.
#[derive(Debug, Clone)]
pub struct SiteContentInput {
    /// Organization name.
    pub organization_name: String,
    /// Tagline.
    pub slogan: String,
    /// "Who we are" paragraph.
    pub definition_text: String,
    /// Vision statement.
    pub vision_text: String,
    /// Mission statement.
    pub mission_text: String,
    /// Goals text.
    pub goals_text: String,
    /// Volunteer form link.
    pub volunteer_form_url: String,
}
