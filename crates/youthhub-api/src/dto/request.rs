//! Request DTOs with validation.
//!
//! Bodies are camelCase. Every field defaults, so a partial body reaches
//! the required-field checks instead of failing deserialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use youthhub_core::error::AppError;
use youthhub_core::types::BranchId;
use youthhub_entity::branch::{BranchContact, BranchInput, SocialLinks};
use youthhub_entity::content::SiteContentInput;
use youthhub_entity::event::EventInput;
use youthhub_service::CreateAdminRequest as CreateAdminCommand;

/// Login request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Full branch record (superadmin create/update).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct BranchRequest {
    pub name: String,
    pub governorate: String,
    pub address: String,
    pub phone: String,
    pub whatsapp: String,
    #[validate(url)]
    pub facebook: Option<String>,
    #[validate(url)]
    pub telegram: Option<String>,
    #[validate(url)]
    pub instagram: Option<String>,
}

impl BranchRequest {
    /// Checks and normalizes the body.
    pub fn into_input(mut self) -> Result<BranchInput, AppError> {
        if [
            &self.name,
            &self.governorate,
            &self.address,
            &self.phone,
            &self.whatsapp,
        ]
        .iter()
        .any(|v| is_blank(v))
        {
            return Err(AppError::validation("Missing required branch fields"));
        }

        self.facebook = optional_text(self.facebook);
        self.telegram = optional_text(self.telegram);
        self.instagram = optional_text(self.instagram);
        self.validate()
            .map_err(|e| validation_error("Invalid social link", &e))?;

        Ok(BranchInput {
            name: self.name.trim().to_string(),
            governorate: self.governorate.trim().to_string(),
            contact: BranchContact {
                address: self.address.trim().to_string(),
                phone: self.phone.trim().to_string(),
                whatsapp: self.whatsapp.trim().to_string(),
                socials: SocialLinks {
                    facebook: self.facebook,
                    telegram: self.telegram,
                    instagram: self.instagram,
                },
            },
        })
    }
}

/// Contact details an admin may change on their own branch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct BranchContactRequest {
    pub address: String,
    pub phone: String,
    pub whatsapp: String,
    #[validate(url)]
    pub facebook: Option<String>,
    #[validate(url)]
    pub telegram: Option<String>,
    #[validate(url)]
    pub instagram: Option<String>,
}

impl BranchContactRequest {
    /// Checks and normalizes the body.
    pub fn into_contact(mut self) -> Result<BranchContact, AppError> {
        if is_blank(&self.address) || is_blank(&self.phone) || is_blank(&self.whatsapp) {
            return Err(AppError::validation(
                "Address, phone, and WhatsApp are required",
            ));
        }

        self.facebook = optional_text(self.facebook);
        self.telegram = optional_text(self.telegram);
        self.instagram = optional_text(self.instagram);
        self.validate()
            .map_err(|e| validation_error("Invalid social link", &e))?;

        Ok(BranchContact {
            address: self.address.trim().to_string(),
            phone: self.phone.trim().to_string(),
            whatsapp: self.whatsapp.trim().to_string(),
            socials: SocialLinks {
                facebook: self.facebook,
                telegram: self.telegram,
                instagram: self.instagram,
            },
        })
    }
}

/// Event create/update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct EventRequest {
    pub title: String,
    #[validate(custom(function = "validate_image_url"))]
    pub image_url: String,
    pub announcement: String,
    #[validate(custom(function = "validate_event_date"))]
    pub event_date: String,
    pub location: String,
}

impl EventRequest {
    /// Checks and normalizes the body. `missing` is the message used
    /// when a required field is blank.
    pub fn into_input(mut self, missing: &str) -> Result<EventInput, AppError> {
        if [
            &self.title,
            &self.image_url,
            &self.announcement,
            &self.event_date,
            &self.location,
        ]
        .iter()
        .any(|v| is_blank(v))
        {
            return Err(AppError::validation(missing));
        }

        self.image_url = self.image_url.trim().to_string();
        self.event_date = self.event_date.trim().to_string();
        self.validate()
            .map_err(|e| validation_error("Invalid event data", &e))?;

        Ok(EventInput {
            title: self.title.trim().to_string(),
            image_url: self.image_url,
            announcement: self.announcement.trim().to_string(),
            event_date: self.event_date,
            location: self.location.trim().to_string(),
        })
    }
}

/// New admin account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateAdminRequest {
    pub username: String,
    pub display_name: String,
    pub password: String,
    pub branch_id: Option<i64>,
}

impl CreateAdminRequest {
    /// Checks presence of every field.
    pub fn into_command(self) -> Result<CreateAdminCommand, AppError> {
        let branch_id = self.branch_id.filter(|id| *id > 0);
        match branch_id {
            Some(branch_id)
                if !is_blank(&self.username)
                    && !is_blank(&self.display_name)
                    && !self.password.is_empty() =>
            {
                Ok(CreateAdminCommand {
                    username: self.username.trim().to_string(),
                    display_name: self.display_name.trim().to_string(),
                    password: self.password,
                    branch_id: BranchId(branch_id),
                })
            }
            _ => Err(AppError::validation("Missing required admin fields")),
        }
    }
}

/// Moves an admin to another branch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignBranchRequest {
    pub branch_id: Option<i64>,
}

impl AssignBranchRequest {
    /// The target branch.
    pub fn branch(&self) -> Result<BranchId, AppError> {
        self.branch_id
            .filter(|id| *id > 0)
            .map(BranchId)
            .ok_or_else(|| AppError::validation("Invalid input"))
    }
}

/// New password for an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResetPasswordRequest {
    pub password: String,
}

/// Landing page content.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContentRequest {
    pub organization_name: String,
    pub slogan: String,
    pub definition_text: String,
    pub vision_text: String,
    pub mission_text: String,
    pub goals_text: String,
    #[validate(url)]
    pub volunteer_form_url: String,
}

impl SiteContentRequest {
    /// Checks and normalizes the body.
    pub fn into_input(mut self) -> Result<SiteContentInput, AppError> {
        if [
            &self.organization_name,
            &self.slogan,
            &self.definition_text,
            &self.vision_text,
            &self.mission_text,
            &self.goals_text,
            &self.volunteer_form_url,
        ]
        .iter()
        .any(|v| is_blank(v))
        {
            return Err(AppError::validation("Missing required content fields"));
        }

        self.volunteer_form_url = self.volunteer_form_url.trim().to_string();
        self.validate()
            .map_err(|e| validation_error("Invalid volunteer form URL", &e))?;

        Ok(SiteContentInput {
            organization_name: self.organization_name.trim().to_string(),
            slogan: self.slogan.trim().to_string(),
            definition_text: self.definition_text.trim().to_string(),
            vision_text: self.vision_text.trim().to_string(),
            mission_text: self.mission_text.trim().to_string(),
            goals_text: self.goals_text.trim().to_string(),
            volunteer_form_url: self.volunteer_form_url,
        })
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Empty or whitespace-only becomes `None`.
fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validation_error(message: &str, errors: &ValidationErrors) -> AppError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|k| k.to_string())
        .collect();
    fields.sort();
    AppError::validation(message).with_details(serde_json::json!({ "fields": fields }))
}

/// Absolute http(s) URL or a root-relative path.
fn validate_image_url(value: &str) -> Result<(), ValidationError> {
    let ok = value.starts_with("https://")
        || value.starts_with("http://")
        || (value.starts_with('/') && !value.starts_with("//"));
    if ok && !value.chars().any(char::is_whitespace) {
        Ok(())
    } else {
        Err(ValidationError::new("image_url"))
    }
}

/// Must start with a `YYYY-MM-DD` calendar date.
fn validate_event_date(value: &str) -> Result<(), ValidationError> {
    value
        .get(..10)
        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("event_date"))
}
