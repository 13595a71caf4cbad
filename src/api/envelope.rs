//! The backend's JSON response envelope and its fail-open normalization.

use serde::Deserialize;

use crate::listing::Page;

/// Every backend response wraps its payload the same way. All fields are
/// optional on the wire; normalization fills the gaps so callers never see
/// a half-built response.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Meta {
    #[serde(rename = "totalPage", default)]
    pub total_page: Option<usize>,
}

/// Result of a successful mutation: the written record plus the backend's
/// human-readable message for the success notification.
#[derive(Debug)]
pub struct Mutation<T> {
    pub message: Option<String>,
    pub record: T,
}

impl<T> Envelope<Vec<T>> {
    /// List normalization: a missing `data` is an empty page, a missing
    /// `meta.totalPage` is a single page.
    pub fn into_page(self) -> Page<T> {
        Page::new(
            self.data.unwrap_or_default(),
            self.meta.and_then(|m| m.total_page).unwrap_or(1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_data_and_meta_default() {
        let envelope: Envelope<Vec<u32>> = serde_json::from_str("{}").unwrap();
        let page = envelope.into_page();
        assert!(page.records.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn full_envelope_round_trips() {
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(
            r#"{"success":true,"message":"ok","data":[1,2,3],"meta":{"totalPage":7}}"#,
        )
        .unwrap();
        assert_eq!(envelope.message.as_deref(), Some("ok"));
        let page = envelope.into_page();
        assert_eq!(page.records, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 7);
    }

    #[test]
    fn zero_total_pages_is_clamped() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"data":[],"meta":{"totalPage":0}}"#).unwrap();
        assert_eq!(envelope.into_page().total_pages, 1);
    }
}
