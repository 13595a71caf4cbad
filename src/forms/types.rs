use serde::Deserialize;
use validator::Validate;

use crate::domain::catalog::NewCatalogType;

#[derive(Deserialize, Validate)]
/// Create/rename form for a product or service type.
pub struct CatalogTypeForm {
    /// Present when renaming an existing entry.
    pub id: Option<String>,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

impl From<&CatalogTypeForm> for NewCatalogType {
    fn from(form: &CatalogTypeForm) -> Self {
        NewCatalogType {
            name: form.name.trim().to_string(),
        }
    }
}

#[derive(Deserialize, Validate)]
/// Delete confirmation for a catalog entry.
pub struct DeleteTypeForm {
    pub id: String,
}
