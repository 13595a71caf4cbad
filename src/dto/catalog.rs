use crate::domain::catalog::CatalogType;
use crate::domain::product::Product;
use crate::domain::service::ServiceOffering;
use crate::dto::ListFilters;
use crate::pagination::TablePage;

pub struct ProductsPageData {
    pub products: TablePage<Product>,
    pub filters: ListFilters,
}

pub struct ServicesPageData {
    pub services: TablePage<ServiceOffering>,
    pub filters: ListFilters,
}

/// One of the two type catalogs (product types / service types).
pub struct TypesPageData {
    pub types: TablePage<CatalogType>,
    pub filters: ListFilters,
}
