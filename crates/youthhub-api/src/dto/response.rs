//! Response DTOs.

use serde::{Deserialize, Serialize};

use youthhub_auth::jwt::Principal;
use youthhub_core::types::{BranchId, UserId};
use youthhub_entity::user::{User, UserRole};

/// `{"items": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

/// `{"item": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse<T> {
    pub item: T,
}

impl<T> ItemResponse<T> {
    pub fn new(item: T) -> Self {
        Self { item }
    }
}

/// `{"ok": true}`, optionally with the id of a created row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl OkResponse {
    /// Plain success.
    pub fn ok() -> Self {
        Self { ok: true, id: None }
    }

    /// Success for a newly created row.
    pub fn created(id: impl Into<i64>) -> Self {
        Self {
            ok: true,
            id: Some(id.into()),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    /// Server version.
    pub version: String,
}

/// Health of the database and media store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Both dependencies answered.
    pub ok: bool,
    pub database: String,
    pub storage: String,
}

/// Successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Session token for the `Authorization: Bearer` header.
    pub token: String,
    /// The signed-in account.
    pub user: UserSummary,
}

/// Account summary returned at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    pub display_name: String,
    pub role: UserRole,
    pub branch_id: Option<BranchId>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            display_name: user.display_name.clone(),
            role: user.role,
            branch_id: user.branch_id,
        }
    }
}

/// The caller's verified claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: Principal,
}
