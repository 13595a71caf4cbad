//! Adapter seam to the backend REST collaborator.
//!
//! Per-collection traits keep the service layer independent of transport so
//! it can run against [`mock::MockApi`] in tests; [`http::HttpApi`] is the
//! real implementation.

use crate::domain::catalog::{CatalogKind, CatalogType, NewCatalogType};
use crate::domain::content::{ContentKind, ContentPage, UpdateContentPage};
use crate::domain::earnings::{
    CommissionEarning, DashboardStats, Payout, SubscriptionEarning,
};
use crate::domain::plan::{NewPlan, Plan, UpdatePlan};
use crate::domain::product::Product;
use crate::domain::service::ServiceOffering;
use crate::domain::support::{SupportTicket, TicketReply};
use crate::domain::types::RecordId;
use crate::domain::user::{AccountStatus, UpdateProfile, User, Vendor};
use crate::listing::{ListQuery, Page};

pub mod envelope;
pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use envelope::Mutation;
pub use errors::{ApiError, ApiResult};

/// List query for vendor-owned collections (products, services): the shared
/// [`ListQuery`] contract plus an optional owning-vendor scope filter.
#[derive(Debug, Clone, Default)]
pub struct VendorScopedQuery {
    pub vendor_id: Option<RecordId>,
    pub list: ListQuery,
}

impl VendorScopedQuery {
    pub fn new(list: ListQuery) -> Self {
        Self {
            vendor_id: None,
            list,
        }
    }

    pub fn vendor(mut self, vendor_id: RecordId) -> Self {
        self.vendor_id = Some(vendor_id);
        self
    }
}

pub trait UserApi {
    async fn list_users(&self, query: &ListQuery) -> ApiResult<Page<User>>;
    async fn get_user(&self, id: &RecordId) -> ApiResult<Option<User>>;
    /// `PUT /users/change-status/{id}` with the desired status.
    async fn change_user_status(
        &self,
        id: &RecordId,
        status: AccountStatus,
    ) -> ApiResult<Mutation<User>>;
}

pub trait VendorApi {
    async fn list_vendors(&self, query: &ListQuery) -> ApiResult<Page<Vendor>>;
    async fn vendor_profile(&self, email: &str) -> ApiResult<Option<Vendor>>;
    async fn update_vendor_profile(
        &self,
        email: &str,
        updates: &UpdateProfile,
    ) -> ApiResult<Mutation<Vendor>>;
    /// Multipart upload of a new avatar image.
    async fn update_vendor_avatar(
        &self,
        email: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<Mutation<Vendor>>;
}

pub trait ProductApi {
    async fn list_products(&self, query: &VendorScopedQuery) -> ApiResult<Page<Product>>;
    async fn get_product(&self, id: &RecordId) -> ApiResult<Option<Product>>;
}

pub trait ServiceApi {
    async fn list_services(&self, query: &VendorScopedQuery) -> ApiResult<Page<ServiceOffering>>;
    async fn get_service(&self, id: &RecordId) -> ApiResult<Option<ServiceOffering>>;
}

pub trait PlanApi {
    /// The plans collection is small and unpaginated on the backend.
    async fn list_plans(&self) -> ApiResult<Vec<Plan>>;
    async fn get_plan(&self, id: &RecordId) -> ApiResult<Option<Plan>>;
    async fn create_plan(&self, plan: &NewPlan) -> ApiResult<Mutation<Plan>>;
    async fn update_plan(&self, id: &RecordId, plan: &UpdatePlan) -> ApiResult<Mutation<Plan>>;
    async fn delete_plan(&self, id: &RecordId) -> ApiResult<Mutation<()>>;
}

pub trait SupportApi {
    async fn list_tickets(&self, query: &ListQuery) -> ApiResult<Page<SupportTicket>>;
    async fn get_ticket(&self, id: &RecordId) -> ApiResult<Option<SupportTicket>>;
    async fn reply_ticket(
        &self,
        id: &RecordId,
        reply: &TicketReply,
    ) -> ApiResult<Mutation<SupportTicket>>;
    async fn delete_ticket(&self, id: &RecordId) -> ApiResult<Mutation<()>>;
}

pub trait CatalogTypeApi {
    async fn list_types(
        &self,
        kind: CatalogKind,
        query: &ListQuery,
    ) -> ApiResult<Page<CatalogType>>;
    async fn create_type(
        &self,
        kind: CatalogKind,
        new_type: &NewCatalogType,
    ) -> ApiResult<Mutation<CatalogType>>;
    async fn rename_type(
        &self,
        kind: CatalogKind,
        id: &RecordId,
        new_type: &NewCatalogType,
    ) -> ApiResult<Mutation<CatalogType>>;
    async fn delete_type(&self, kind: CatalogKind, id: &RecordId) -> ApiResult<Mutation<()>>;
}

pub trait ContentApi {
    async fn content_page(&self, kind: ContentKind) -> ApiResult<Option<ContentPage>>;
    async fn update_content_page(
        &self,
        kind: ContentKind,
        updates: &UpdateContentPage,
    ) -> ApiResult<Mutation<ContentPage>>;
}

pub trait EarningsApi {
    async fn commission_earnings(&self, query: &ListQuery) -> ApiResult<Page<CommissionEarning>>;
    async fn subscription_earnings(
        &self,
        query: &ListQuery,
    ) -> ApiResult<Page<SubscriptionEarning>>;
    async fn list_payouts(&self, query: &ListQuery) -> ApiResult<Page<Payout>>;
    async fn dashboard_stats(&self) -> ApiResult<DashboardStats>;
}
