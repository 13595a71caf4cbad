use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::RecordId;

/// Uploaded image reference (CDN url + storage key).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
    pub key: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProductStatus {
    Available,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "TBC")]
    Tbc,
    Discontinued,
}

/// Slimmed-down vendor reference embedded in catalog records.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VendorRef {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(default)]
    pub vendor: Option<VendorRef>,
    pub name: String,
    pub product_code: String,
    #[serde(default)]
    pub images: Vec<ImageRef>,
    pub product_type: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub size: Option<String>,
    pub status: ProductStatus,
    #[serde(default)]
    pub highlight_status: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
