use validator::Validate;

use crate::SERVICE_ACCESS_ROLE;
use crate::api::{CatalogTypeApi, Mutation};
use crate::domain::catalog::{CatalogKind, CatalogType, NewCatalogType};
use crate::domain::types::RecordId;
use crate::dto::catalog::TypesPageData;
use crate::forms::types::{CatalogTypeForm, DeleteTypeForm};
use crate::listing::ListQuery;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::TablePage;
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult, form_error};

/// Loads one page of a type catalog (product types or service types).
pub async fn load_types_page<A>(
    api: &A,
    user: &AuthenticatedUser,
    kind: CatalogKind,
    query: ListQuery,
) -> ServiceResult<TypesPageData>
where
    A: CatalogTypeApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = api.list_types(kind, &query).await?;

    Ok(TypesPageData {
        filters: (&query).into(),
        types: TablePage::new(page, query.page),
    })
}

/// Creates a catalog entry, or renames one when the form carries an id.
pub async fn save_type<A>(
    api: &A,
    user: &AuthenticatedUser,
    kind: CatalogKind,
    form: &CatalogTypeForm,
) -> ServiceResult<Mutation<CatalogType>>
where
    A: CatalogTypeApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate type form: {e}");
        return Err(form_error(&e));
    }

    let payload: NewCatalogType = form.into();

    match &form.id {
        Some(id) if !id.is_empty() => {
            let id = RecordId::new(id.as_str())?;
            api.rename_type(kind, &id, &payload).await.map_err(Into::into)
        }
        _ => api.create_type(kind, &payload).await.map_err(Into::into),
    }
}

/// Deletes a catalog entry.
pub async fn remove_type<A>(
    api: &A,
    user: &AuthenticatedUser,
    kind: CatalogKind,
    form: &DeleteTypeForm,
) -> ServiceResult<Mutation<()>>
where
    A: CatalogTypeApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let id = RecordId::new(form.id.as_str())?;
    api.delete_type(kind, &id).await.map_err(Into::into)
}
