use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{RecordId, RichText};

/// Static pages editable from the console.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    PrivacyPolicy,
    Terms,
    About,
}

impl ContentKind {
    /// Collection path segment on the backend.
    pub fn collection(self) -> &'static str {
        match self {
            ContentKind::PrivacyPolicy => "privacy",
            ContentKind::Terms => "terms",
            ContentKind::About => "about",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ContentKind::PrivacyPolicy => "Privacy Policy",
            ContentKind::Terms => "Terms & Conditions",
            ContentKind::About => "About Us",
        }
    }

    /// Route slugs accepted in `/content/{kind}`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "privacy-policy" => Some(ContentKind::PrivacyPolicy),
            "terms" => Some(ContentKind::Terms),
            "about" => Some(ContentKind::About),
            _ => None,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ContentKind::PrivacyPolicy => "privacy-policy",
            ContentKind::Terms => "terms",
            ContentKind::About => "about",
        }
    }
}

/// A rich-text document as stored by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentPage {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Update payload carrying the sanitized body.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct UpdateContentPage {
    pub description: RichText,
}
