use crate::dto::ListFilters;
use crate::domain::product::Product;
use crate::domain::service::ServiceOffering;
use crate::domain::user::{User, Vendor};
use crate::pagination::TablePage;

/// Data required to render the account-management table.
pub struct UsersPageData {
    pub users: TablePage<User>,
    pub filters: ListFilters,
}

/// Data required to render the vendor accounts table.
pub struct VendorsPageData {
    pub vendors: TablePage<Vendor>,
    pub filters: ListFilters,
}

/// A vendor account opened from the table, with their catalog.
pub struct VendorAccountData {
    pub vendor: Vendor,
    pub products: TablePage<Product>,
    pub services: TablePage<ServiceOffering>,
}
