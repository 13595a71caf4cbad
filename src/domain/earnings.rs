use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::RecordId;

/// Commission retained on a single marketplace transaction.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommissionEarning {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub provider_name: String,
    pub item_number: String,
    pub transaction_price: f64,
    pub commission: String,
    pub offer_type: OfferType,
    pub transaction_date: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum OfferType {
    Service,
    Product,
}

/// Revenue from a vendor buying a subscription plan.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionEarning {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub provider_name: String,
    pub account_type: String,
    pub subscription_type: String,
    pub amount: f64,
    pub purchase_date: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PayoutStatus {
    Pending,
    Reject,
    Paid,
}

/// A vendor's withdrawal request as listed on the payout screen.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    pub available_balance: String,
    pub method: String,
    pub request_date: DateTime<Utc>,
    pub status: PayoutStatus,
}

/// One month of an overview chart series.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPoint {
    pub month: String,
    pub value: f64,
}

/// Headline numbers for the dashboard cards.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_vendors: u64,
    #[serde(default)]
    pub total_earnings: f64,
    #[serde(default)]
    pub total_subscribers: u64,
    #[serde(default)]
    pub user_overview: Vec<MonthlyPoint>,
    #[serde(default)]
    pub earning_overview: Vec<MonthlyPoint>,
}
