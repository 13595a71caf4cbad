use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::RecordId;

/// Role assigned to an account by the backend.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Vendor,
    User,
    Admin,
}

/// Moderation status of an account.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Ongoing,
    Confirmed,
    Blocked,
}

impl AccountStatus {
    /// The status the block/unblock control moves this account to.
    ///
    /// Only `ongoing` and `blocked` take part in the toggle. `confirmed`
    /// has no wired transition, so the control is unavailable for it.
    pub fn toggled(self) -> Option<AccountStatus> {
        match self {
            AccountStatus::Ongoing => Some(AccountStatus::Blocked),
            AccountStatus::Blocked => Some(AccountStatus::Ongoing),
            AccountStatus::Confirmed => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccountStatus::Ongoing => "ongoing",
            AccountStatus::Confirmed => "confirmed",
            AccountStatus::Blocked => "blocked",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub status: AccountStatus,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Display name for tables; falls back to first + last when the backend
    /// did not precompute one.
    pub fn display_name(&self) -> String {
        match &self.full_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

/// Vendor account as returned by the vendors collection. Same account core
/// as [`User`] plus the storefront fields vendors carry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub store_name: Option<String>,
    pub status: AccountStatus,
    #[serde(default)]
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile fields an admin may change on their own account or a vendor's.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl UpdateProfile {
    #[must_use]
    pub fn new(first_name: String, last_name: String, email: String, phone: String) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_lowercase(),
            phone: phone.trim().to_string(),
        }
    }
}
