//! Bidirectional mapping between [`ListQuery`] and the address-bar query
//! string.
//!
//! Parsing fails open on every field: a missing or malformed value falls back
//! to its default instead of raising, so a hand-edited or stale URL can never
//! break a list screen. Serialization is canonical: absent filters are
//! omitted entirely rather than written as empty `key=` pairs, and
//! `parse(to_query_string(q)) == q` holds for every reachable state.

use chrono::NaiveDate;
use serde::Deserialize;

use super::{DEFAULT_PAGE_SIZE, ListQuery};

/// Wire keys as the backend and the original console spell them.
const KEY_SEARCH: &str = "searchTerm";
const KEY_CREATED_AT: &str = "createdAt";
const KEY_PAGE: &str = "page";
const KEY_LIMIT: &str = "limit";

/// Raw, untrusted view of the query string. Everything is optional text so a
/// malformed value degrades to "absent" instead of failing the whole parse.
#[derive(Debug, Default, Deserialize)]
struct RawListParams {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
    #[serde(rename = "createdAt")]
    created_at: Option<String>,
    page: Option<String>,
    limit: Option<String>,
}

/// Accepts both the canonical `YYYY-MM-DD` form and a full ISO-8601 instant
/// (older links carry `toISOString()` output); anything else is absent.
fn parse_day(raw: &str) -> Option<NaiveDate> {
    let prefix = raw.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

fn parse_positive(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

impl ListQuery {
    /// Parses a query string (without the leading `?`) into a canonical
    /// [`ListQuery`]. Unknown keys are ignored; they belong to other
    /// controls on the page.
    pub fn parse(query_string: &str) -> Self {
        let raw: RawListParams = serde_html_form::from_str(query_string).unwrap_or_default();

        Self {
            search_term: raw
                .search_term
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            created_at: raw.created_at.as_deref().and_then(parse_day),
            page: parse_positive(raw.page.as_deref(), 1),
            limit: parse_positive(raw.limit.as_deref(), DEFAULT_PAGE_SIZE),
        }
    }

    /// Serializes to the canonical query string: empty search and absent
    /// date are omitted, `page` and `limit` are always written.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::with_capacity(4);
        if !self.search_term.is_empty() {
            pairs.push((KEY_SEARCH, self.search_term.clone()));
        }
        if let Some(day) = self.created_at {
            pairs.push((KEY_CREATED_AT, day.format("%Y-%m-%d").to_string()));
        }
        pairs.push((KEY_PAGE, self.page.to_string()));
        pairs.push((KEY_LIMIT, self.limit.to_string()));

        // Serializing string pairs cannot fail.
        serde_html_form::to_string(&pairs).unwrap_or_default()
    }

    /// Request parameters for the backend: `page` and `limit` always,
    /// `searchTerm` only when non-empty, `createdAt` as the ISO-8601 instant
    /// at midnight UTC of the selected day.
    pub fn api_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            (KEY_PAGE, self.page.to_string()),
            (KEY_LIMIT, self.limit.to_string()),
        ];
        if !self.search_term.is_empty() {
            params.push((KEY_SEARCH, self.search_term.clone()));
        }
        if let Some(day) = self.created_at {
            params.push((KEY_CREATED_AT, format!("{}T00:00:00.000Z", day.format("%Y-%m-%d"))));
        }
        params
    }
}

/// Rewrites a query string the way the address bar is updated on the client:
/// existing unrelated parameters keep their position, an update with a value
/// replaces (or appends) its key, and an update with `None` or an empty
/// value deletes the key outright.
pub fn merge_query_params(current: &str, updates: &[(&str, Option<String>)]) -> String {
    let mut pairs: Vec<(String, String)> =
        serde_html_form::from_str(current).unwrap_or_default();

    for (key, value) in updates {
        match value.as_deref().filter(|v| !v.is_empty()) {
            Some(value) => {
                let mut found = false;
                pairs.retain_mut(|(k, v)| {
                    if k == key {
                        if found {
                            return false;
                        }
                        found = true;
                        *v = value.to_string();
                    }
                    true
                });
                if !found {
                    pairs.push((key.to_string(), value.to_string()));
                }
            }
            None => pairs.retain(|(k, _)| k != key),
        }
    }

    serde_html_form::to_string(&pairs).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_string_yields_defaults() {
        let q = ListQuery::parse("");
        assert_eq!(q, ListQuery::default());
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, DEFAULT_PAGE_SIZE);
        assert!(q.search_term.is_empty());
        assert!(q.created_at.is_none());
    }

    #[test]
    fn malformed_created_at_fails_open() {
        let q = ListQuery::parse("createdAt=not-a-date");
        assert!(q.created_at.is_none());
    }

    #[test]
    fn iso_instant_created_at_is_truncated_to_day() {
        let q = ListQuery::parse("createdAt=2025-07-01T09%3A15%3A00.000Z");
        assert_eq!(q.created_at, NaiveDate::from_ymd_opt(2025, 7, 1));
    }

    #[test]
    fn round_trip_law() {
        let states = [
            ListQuery::default(),
            ListQuery::new().with_search("netflix").paginate(3, 25),
            ListQuery::new().with_created_at(NaiveDate::from_ymd_opt(2025, 7, 4)),
            ListQuery::new()
                .with_search("a b&c=d")
                .with_created_at(NaiveDate::from_ymd_opt(2024, 12, 31))
                .paginate(7, 50),
        ];
        for state in states {
            assert_eq!(ListQuery::parse(&state.to_query_string()), state);
        }
    }

    #[test]
    fn canonical_form_omits_absent_fields() {
        let qs = ListQuery::default().to_query_string();
        assert!(!qs.contains("searchTerm"));
        assert!(!qs.contains("createdAt"));
        assert!(qs.contains("page=1"));
        assert!(qs.contains("limit=10"));
    }

    #[test]
    fn merge_preserves_unrelated_params_and_deletes_empties() {
        let merged = merge_query_params(
            "tab=products&searchTerm=old&page=4",
            &[
                ("searchTerm", Some("new".to_string())),
                ("page", Some("1".to_string())),
                ("createdAt", None),
            ],
        );
        assert_eq!(merged, "tab=products&searchTerm=new&page=1");

        let cleared = merge_query_params(&merged, &[("searchTerm", Some(String::new()))]);
        assert_eq!(cleared, "tab=products&page=1");
    }
}
