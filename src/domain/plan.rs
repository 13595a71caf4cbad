use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::RecordId;

/// Feature switches a plan grants to its subscribers.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanFeatures {
    pub team_members: bool,
    pub shared_calendar: bool,
    pub task_hub: bool,
    pub grant_permission_access: bool,
}

/// Quantitative limits attached to a plan.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanLimits {
    pub service_max: u32,
    pub product_max: u32,
    pub highlight_offer_max: u32,
    /// Percentage fee charged per transaction.
    pub transaction_fee: f64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValidityKind {
    #[serde(rename = "unlimited")]
    Unlimited,
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "3month")]
    ThreeMonths,
    #[serde(rename = "6month")]
    SixMonths,
    #[serde(rename = "custom")]
    Custom,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Validity {
    #[serde(rename = "type")]
    pub kind: ValidityKind,
    /// Only meaningful when `kind` is `custom`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_in_months: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    pub cost: f64,
    pub description: String,
    pub features: PlanFeatures,
    pub limits: PlanLimits,
    pub validity: Validity,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a plan. The backend assigns id and timestamps.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPlan {
    pub name: String,
    pub cost: f64,
    pub description: String,
    pub features: PlanFeatures,
    pub limits: PlanLimits,
    pub validity: Validity,
}

/// Payload for updating a plan in place; the full document is replaced
/// field-for-field on the backend, so the shape matches [`NewPlan`].
pub type UpdatePlan = NewPlan;
