use validator::Validate;

use crate::SERVICE_ACCESS_ROLE;
use crate::api::{Mutation, ProductApi, ServiceApi, UserApi, VendorApi, VendorScopedQuery};
use crate::domain::types::RecordId;
use crate::domain::user::{UpdateProfile, User, Vendor};
use crate::dto::accounts::{UsersPageData, VendorAccountData, VendorsPageData};
use crate::forms::accounts::ProfileForm;
use crate::listing::ListQuery;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::TablePage;
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult, form_error};

/// Loads one page of user accounts for the account-management table.
pub async fn load_users_page<A>(
    api: &A,
    user: &AuthenticatedUser,
    query: ListQuery,
) -> ServiceResult<UsersPageData>
where
    A: UserApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = api.list_users(&query).await?;

    Ok(UsersPageData {
        filters: (&query).into(),
        users: TablePage::new(page, query.page),
    })
}

/// Loads one page of vendor accounts.
pub async fn load_vendors_page<A>(
    api: &A,
    user: &AuthenticatedUser,
    query: ListQuery,
) -> ServiceResult<VendorsPageData>
where
    A: VendorApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = api.list_vendors(&query).await?;

    Ok(VendorsPageData {
        filters: (&query).into(),
        vendors: TablePage::new(page, query.page),
    })
}

/// Fetches a single account for the detail view.
pub async fn load_account<A>(
    api: &A,
    user: &AuthenticatedUser,
    id: &str,
) -> ServiceResult<User>
where
    A: UserApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let id = RecordId::new(id)?;
    api.get_user(&id).await?.ok_or(ServiceError::NotFound)
}

/// Applies the block/unblock toggle to an account.
///
/// The transition is derived from the account's live status, not the
/// submitted row, so two admins racing on the same record stay consistent.
/// Accounts whose status has no wired transition (`confirmed`) are rejected
/// before any mutation is sent.
pub async fn toggle_account_status<A>(
    api: &A,
    user: &AuthenticatedUser,
    id: &str,
) -> ServiceResult<Mutation<User>>
where
    A: UserApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let id = RecordId::new(id)?;
    let account = api.get_user(&id).await?.ok_or(ServiceError::NotFound)?;

    let next = account.status.toggled().ok_or_else(|| {
        ServiceError::TypeConstraint(
            "This account's status has no block/unblock transition.".to_string(),
        )
    })?;

    api.change_user_status(&id, next).await.map_err(Into::into)
}

/// Loads a vendor account plus one page each of their products and
/// services for the tabbed detail view.
pub async fn load_vendor_account<A>(
    api: &A,
    user: &AuthenticatedUser,
    email: &str,
    products_query: ListQuery,
    services_query: ListQuery,
) -> ServiceResult<VendorAccountData>
where
    A: VendorApi + ProductApi + ServiceApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let vendor = api
        .vendor_profile(email)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let products = api
        .list_products(&VendorScopedQuery::new(products_query.clone()).vendor(vendor.id.clone()))
        .await?;
    let services = api
        .list_services(&VendorScopedQuery::new(services_query.clone()).vendor(vendor.id.clone()))
        .await?;

    Ok(VendorAccountData {
        vendor,
        products: TablePage::new(products, products_query.page),
        services: TablePage::new(services, services_query.page),
    })
}

/// Validates and applies the signed-in admin's profile changes.
pub async fn update_own_profile<A>(
    api: &A,
    user: &AuthenticatedUser,
    form: &ProfileForm,
) -> ServiceResult<Mutation<Vendor>>
where
    A: VendorApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate profile form: {e}");
        return Err(form_error(&e));
    }

    let updates: UpdateProfile = form.into();
    api.update_vendor_profile(&user.email, &updates)
        .await
        .map_err(Into::into)
}

/// Uploads a new avatar for the signed-in admin.
pub async fn update_own_avatar<A>(
    api: &A,
    user: &AuthenticatedUser,
    file_name: &str,
    bytes: Vec<u8>,
) -> ServiceResult<Mutation<Vendor>>
where
    A: VendorApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if bytes.is_empty() {
        return Err(ServiceError::Form("The uploaded image is empty.".to_string()));
    }

    api.update_vendor_avatar(&user.email, file_name, bytes)
        .await
        .map_err(Into::into)
}
