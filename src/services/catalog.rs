use crate::SERVICE_ACCESS_ROLE;
use crate::api::{ProductApi, ServiceApi, VendorScopedQuery};
use crate::domain::product::Product;
use crate::domain::service::ServiceOffering;
use crate::domain::types::RecordId;
use crate::dto::catalog::{ProductsPageData, ServicesPageData};
use crate::listing::ListQuery;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::TablePage;
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};

/// Loads one page of products, optionally scoped to a vendor.
pub async fn load_products_page<A>(
    api: &A,
    user: &AuthenticatedUser,
    query: ListQuery,
    vendor_id: Option<RecordId>,
) -> ServiceResult<ProductsPageData>
where
    A: ProductApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let mut scoped = VendorScopedQuery::new(query.clone());
    if let Some(vendor_id) = vendor_id {
        scoped = scoped.vendor(vendor_id);
    }

    let page = api.list_products(&scoped).await?;

    Ok(ProductsPageData {
        filters: (&query).into(),
        products: TablePage::new(page, query.page),
    })
}

/// Loads one page of services, optionally scoped to a vendor.
pub async fn load_services_page<A>(
    api: &A,
    user: &AuthenticatedUser,
    query: ListQuery,
    vendor_id: Option<RecordId>,
) -> ServiceResult<ServicesPageData>
where
    A: ServiceApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let mut scoped = VendorScopedQuery::new(query.clone());
    if let Some(vendor_id) = vendor_id {
        scoped = scoped.vendor(vendor_id);
    }

    let page = api.list_services(&scoped).await?;

    Ok(ServicesPageData {
        filters: (&query).into(),
        services: TablePage::new(page, query.page),
    })
}

/// Fetches a single product for the view modal.
pub async fn load_product<A>(
    api: &A,
    user: &AuthenticatedUser,
    id: &str,
) -> ServiceResult<Product>
where
    A: ProductApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let id = RecordId::new(id)?;
    api.get_product(&id).await?.ok_or(ServiceError::NotFound)
}

/// Fetches a single service for the view modal.
pub async fn load_service<A>(
    api: &A,
    user: &AuthenticatedUser,
    id: &str,
) -> ServiceResult<ServiceOffering>
where
    A: ServiceApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let id = RecordId::new(id)?;
    api.get_service(&id).await?.ok_or(ServiceError::NotFound)
}
