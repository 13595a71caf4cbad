//! Mock backend adapter for isolating services in tests.

use mockall::mock;

use crate::api::envelope::Mutation;
use crate::api::errors::ApiResult;
use crate::api::{
    CatalogTypeApi, ContentApi, EarningsApi, PlanApi, ProductApi, ServiceApi, SupportApi,
    UserApi, VendorApi, VendorScopedQuery,
};
use crate::domain::catalog::{CatalogKind, CatalogType, NewCatalogType};
use crate::domain::content::{ContentKind, ContentPage, UpdateContentPage};
use crate::domain::earnings::{
    CommissionEarning, DashboardStats, Payout, SubscriptionEarning,
};
use crate::domain::plan::{NewPlan, Plan};
use crate::domain::product::Product;
use crate::domain::service::ServiceOffering;
use crate::domain::support::{SupportTicket, TicketReply};
use crate::domain::types::RecordId;
use crate::domain::user::{AccountStatus, UpdateProfile, User, Vendor};
use crate::listing::{ListQuery, Page};

mock! {
    pub Api {}

    impl UserApi for Api {
        async fn list_users(&self, query: &ListQuery) -> ApiResult<Page<User>>;
        async fn get_user(&self, id: &RecordId) -> ApiResult<Option<User>>;
        async fn change_user_status(
            &self,
            id: &RecordId,
            status: AccountStatus,
        ) -> ApiResult<Mutation<User>>;
    }

    impl VendorApi for Api {
        async fn list_vendors(&self, query: &ListQuery) -> ApiResult<Page<Vendor>>;
        async fn vendor_profile(&self, email: &str) -> ApiResult<Option<Vendor>>;
        async fn update_vendor_profile(
            &self,
            email: &str,
            updates: &UpdateProfile,
        ) -> ApiResult<Mutation<Vendor>>;
        async fn update_vendor_avatar(
            &self,
            email: &str,
            file_name: &str,
            bytes: Vec<u8>,
        ) -> ApiResult<Mutation<Vendor>>;
    }

    impl ProductApi for Api {
        async fn list_products(&self, query: &VendorScopedQuery) -> ApiResult<Page<Product>>;
        async fn get_product(&self, id: &RecordId) -> ApiResult<Option<Product>>;
    }

    impl ServiceApi for Api {
        async fn list_services(&self, query: &VendorScopedQuery) -> ApiResult<Page<ServiceOffering>>;
        async fn get_service(&self, id: &RecordId) -> ApiResult<Option<ServiceOffering>>;
    }

    impl PlanApi for Api {
        async fn list_plans(&self) -> ApiResult<Vec<Plan>>;
        async fn get_plan(&self, id: &RecordId) -> ApiResult<Option<Plan>>;
        async fn create_plan(&self, plan: &NewPlan) -> ApiResult<Mutation<Plan>>;
        async fn update_plan(&self, id: &RecordId, plan: &NewPlan) -> ApiResult<Mutation<Plan>>;
        async fn delete_plan(&self, id: &RecordId) -> ApiResult<Mutation<()>>;
    }

    impl SupportApi for Api {
        async fn list_tickets(&self, query: &ListQuery) -> ApiResult<Page<SupportTicket>>;
        async fn get_ticket(&self, id: &RecordId) -> ApiResult<Option<SupportTicket>>;
        async fn reply_ticket(
            &self,
            id: &RecordId,
            reply: &TicketReply,
        ) -> ApiResult<Mutation<SupportTicket>>;
        async fn delete_ticket(&self, id: &RecordId) -> ApiResult<Mutation<()>>;
    }

    impl CatalogTypeApi for Api {
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

    impl ContentApi for Api {
        async fn content_page(&self, kind: ContentKind) -> ApiResult<Option<ContentPage>>;
        async fn update_content_page(
            &self,
            kind: ContentKind,
            updates: &UpdateContentPage,
        ) -> ApiResult<Mutation<ContentPage>>;
    }

    impl EarningsApi for Api {
        async fn commission_earnings(&self, query: &ListQuery) -> ApiResult<Page<CommissionEarning>>;
        async fn subscription_earnings(
            &self,
            query: &ListQuery,
        ) -> ApiResult<Page<SubscriptionEarning>>;
        async fn list_payouts(&self, query: &ListQuery) -> ApiResult<Page<Payout>>;
        async fn dashboard_stats(&self) -> ApiResult<DashboardStats>;
    }
}
