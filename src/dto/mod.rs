//! DTO modules that bridge services with templates.

use serde::Serialize;

use crate::listing::ListQuery;

pub mod accounts;
pub mod catalog;
pub mod content;
pub mod earnings;
pub mod main;
pub mod plans;
pub mod support;

/// Filter values echoed back into the search box and date picker.
#[derive(Debug, Default, Serialize)]
pub struct ListFilters {
    pub search_query: Option<String>,
    pub created_at: Option<String>,
}

impl From<&ListQuery> for ListFilters {
    fn from(query: &ListQuery) -> Self {
        Self {
            search_query: (!query.search_term.is_empty()).then(|| query.search_term.clone()),
            created_at: query.created_at.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}
