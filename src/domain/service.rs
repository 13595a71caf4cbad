use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::product::{ImageRef, VendorRef};
use crate::domain::types::RecordId;

/// One bookable pricing row of a service (duration + price + discount).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServicePricing {
    pub id: String,
    pub duration: String,
    pub price: String,
    pub discount: String,
    pub final_price: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Opening hours for a single day; days without an entry are closed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub enabled: bool,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    #[serde(default)]
    pub weekly_schedule: HashMap<WeekDay, DaySchedule>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(default)]
    pub vendor: Option<VendorRef>,
    pub service_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(default)]
    pub saved_services: Vec<ServicePricing>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<ImageRef>,
    pub status: String,
    #[serde(default)]
    pub highlight_status: Option<String>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
