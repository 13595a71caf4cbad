use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::RecordId;

/// Which of the two type catalogs a record belongs to.
///
/// Product types and service types live in separate collections with an
/// identical shape, so one entity covers both.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogKind {
    ProductType,
    ServiceType,
}

impl CatalogKind {
    /// Collection path segment on the backend.
    pub fn collection(self) -> &'static str {
        match self {
            CatalogKind::ProductType => "product-type",
            CatalogKind::ServiceType => "service-type",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::ProductType => "Product type",
            CatalogKind::ServiceType => "Service type",
        }
    }
}

/// A named entry of a type catalog.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogType {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/rename payload for a catalog entry.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewCatalogType {
    pub name: String,
}
