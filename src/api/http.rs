//! `reqwest` implementation of the backend adapter traits.
//!
//! One [`HttpApi`] is built per request from the shared [`reqwest::Client`],
//! the configured base URL and the caller's session token, mirroring how a
//! connection is checked out of a pool. The session cookie is forwarded on
//! every call; the backend enforces authorization on its side.

use reqwest::header::COOKIE;
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::envelope::{Envelope, Mutation};
use crate::api::errors::{ApiError, ApiResult};
use crate::api::{
    CatalogTypeApi, ContentApi, EarningsApi, PlanApi, ProductApi, ServiceApi, SupportApi,
    UserApi, VendorApi, VendorScopedQuery,
};
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

#[derive(Serialize)]
struct ChangeStatusBody<'a> {
    status: &'a str,
}

pub struct HttpApi<'a> {
    http: &'a reqwest::Client,
    base_url: &'a str,
    session_cookie: String,
}

impl<'a> HttpApi<'a> {
    /// `cookie_name` is the session cookie the auth collaborator issued;
    /// its value is forwarded verbatim.
    pub fn new(http: &'a reqwest::Client, base_url: &'a str, cookie_name: &str, token: &str) -> Self {
        Self {
            http,
            base_url,
            session_cookie: format!("{cookie_name}={token}"),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.endpoint(path))
            .header(COOKIE, &self.session_cookie)
    }

    /// Checks the status line and decodes the envelope. A non-2xx response
    /// becomes [`ApiError::Rejected`] carrying the backend's `message` when
    /// the body has one.
    async fn read_envelope<T: DeserializeOwned>(response: Response) -> ApiResult<Envelope<T>> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            let message = response
                .json::<Envelope<serde_json::Value>>()
                .await
                .ok()
                .and_then(|envelope| envelope.message);
            return Err(ApiError::rejected(status.as_u16(), message));
        }
        response
            .json::<Envelope<T>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        collection: &str,
        params: &[(&str, String)],
    ) -> ApiResult<Page<T>> {
        let response = self
            .request(Method::GET, collection)
            .query(params)
            .send()
            .await?;
        Ok(Self::read_envelope::<Vec<T>>(response).await?.into_page())
    }

    async fn get_one<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Option<T>> {
        let response = self.request(Method::GET, path).send().await?;
        match Self::read_envelope::<T>(response).await {
            Ok(envelope) => Ok(envelope.data),
            Err(ApiError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn send_mutation<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ApiResult<Mutation<T>> {
        let response = self.request(method, path).json(body).send().await?;
        let envelope = Self::read_envelope::<T>(response).await?;
        let record = envelope
            .data
            .ok_or_else(|| ApiError::Decode("mutation response carried no data".to_string()))?;
        Ok(Mutation {
            message: envelope.message,
            record,
        })
    }

    /// Mutation whose response body matters only for its `message`
    /// (deletes and other acknowledgement-style commands).
    async fn send_command(&self, method: Method, path: &str) -> ApiResult<Mutation<()>> {
        let response = self.request(method, path).send().await?;
        let envelope = Self::read_envelope::<serde_json::Value>(response).await?;
        Ok(Mutation {
            message: envelope.message,
            record: (),
        })
    }
}

impl UserApi for HttpApi<'_> {
    async fn list_users(&self, query: &ListQuery) -> ApiResult<Page<User>> {
        self.get_list("users", &query.api_params()).await
    }

    async fn get_user(&self, id: &RecordId) -> ApiResult<Option<User>> {
        self.get_one(&format!("users/{id}")).await
    }

    async fn change_user_status(
        &self,
        id: &RecordId,
        status: AccountStatus,
    ) -> ApiResult<Mutation<User>> {
        self.send_mutation(
            Method::PUT,
            &format!("users/change-status/{id}"),
            &ChangeStatusBody {
                status: status.as_str(),
            },
        )
        .await
    }
}

impl VendorApi for HttpApi<'_> {
    async fn list_vendors(&self, query: &ListQuery) -> ApiResult<Page<Vendor>> {
        self.get_list("vendors", &query.api_params()).await
    }

    async fn vendor_profile(&self, email: &str) -> ApiResult<Option<Vendor>> {
        self.get_one(&format!("vendors/profile/{email}")).await
    }

    async fn update_vendor_profile(
        &self,
        email: &str,
        updates: &UpdateProfile,
    ) -> ApiResult<Mutation<Vendor>> {
        self.send_mutation(Method::PATCH, &format!("vendors/profile/{email}"), updates)
            .await
    }

    async fn update_vendor_avatar(
        &self,
        email: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<Mutation<Vendor>> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("image", part);

        let response = self
            .request(Method::PATCH, &format!("vendors/profile/{email}"))
            .multipart(form)
            .send()
            .await?;
        let envelope = Self::read_envelope::<Vendor>(response).await?;
        let record = envelope
            .data
            .ok_or_else(|| ApiError::Decode("mutation response carried no data".to_string()))?;
        Ok(Mutation {
            message: envelope.message,
            record,
        })
    }
}

impl ProductApi for HttpApi<'_> {
    async fn list_products(&self, query: &VendorScopedQuery) -> ApiResult<Page<Product>> {
        let mut params = query.list.api_params();
        if let Some(vendor_id) = &query.vendor_id {
            params.push(("vendorId", vendor_id.to_string()));
        }
        self.get_list("products", &params).await
    }

    async fn get_product(&self, id: &RecordId) -> ApiResult<Option<Product>> {
        self.get_one(&format!("products/{id}")).await
    }
}

impl ServiceApi for HttpApi<'_> {
    async fn list_services(&self, query: &VendorScopedQuery) -> ApiResult<Page<ServiceOffering>> {
        let mut params = query.list.api_params();
        if let Some(vendor_id) = &query.vendor_id {
            params.push(("vendorId", vendor_id.to_string()));
        }
        self.get_list("services", &params).await
    }

    async fn get_service(&self, id: &RecordId) -> ApiResult<Option<ServiceOffering>> {
        self.get_one(&format!("services/{id}")).await
    }
}

impl PlanApi for HttpApi<'_> {
    async fn list_plans(&self) -> ApiResult<Vec<Plan>> {
        let response = self.request(Method::GET, "plans").send().await?;
        let envelope = Self::read_envelope::<Vec<Plan>>(response).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn get_plan(&self, id: &RecordId) -> ApiResult<Option<Plan>> {
        self.get_one(&format!("plans/{id}")).await
    }

    async fn create_plan(&self, plan: &NewPlan) -> ApiResult<Mutation<Plan>> {
        self.send_mutation(Method::POST, "plans", plan).await
    }

    async fn update_plan(&self, id: &RecordId, plan: &UpdatePlan) -> ApiResult<Mutation<Plan>> {
        self.send_mutation(Method::PATCH, &format!("plans/{id}"), plan)
            .await
    }

    async fn delete_plan(&self, id: &RecordId) -> ApiResult<Mutation<()>> {
        self.send_command(Method::DELETE, &format!("plans/{id}")).await
    }
}

impl SupportApi for HttpApi<'_> {
    async fn list_tickets(&self, query: &ListQuery) -> ApiResult<Page<SupportTicket>> {
        self.get_list("supports", &query.api_params()).await
    }

    async fn get_ticket(&self, id: &RecordId) -> ApiResult<Option<SupportTicket>> {
        self.get_one(&format!("supports/{id}")).await
    }

    async fn reply_ticket(
        &self,
        id: &RecordId,
        reply: &TicketReply,
    ) -> ApiResult<Mutation<SupportTicket>> {
        self.send_mutation(Method::PATCH, &format!("supports/{id}"), reply)
            .await
    }

    async fn delete_ticket(&self, id: &RecordId) -> ApiResult<Mutation<()>> {
        self.send_command(Method::DELETE, &format!("supports/{id}"))
            .await
    }
}

impl CatalogTypeApi for HttpApi<'_> {
    async fn list_types(
        &self,
        kind: CatalogKind,
        query: &ListQuery,
    ) -> ApiResult<Page<CatalogType>> {
        self.get_list(kind.collection(), &query.api_params()).await
    }

    async fn create_type(
        &self,
        kind: CatalogKind,
        new_type: &NewCatalogType,
    ) -> ApiResult<Mutation<CatalogType>> {
        self.send_mutation(Method::POST, kind.collection(), new_type)
            .await
    }

    async fn rename_type(
        &self,
        kind: CatalogKind,
        id: &RecordId,
        new_type: &NewCatalogType,
    ) -> ApiResult<Mutation<CatalogType>> {
        self.send_mutation(
            Method::PATCH,
            &format!("{}/{id}", kind.collection()),
            new_type,
        )
        .await
    }

    async fn delete_type(&self, kind: CatalogKind, id: &RecordId) -> ApiResult<Mutation<()>> {
        self.send_command(Method::DELETE, &format!("{}/{id}", kind.collection()))
            .await
    }
}

impl ContentApi for HttpApi<'_> {
    async fn content_page(&self, kind: ContentKind) -> ApiResult<Option<ContentPage>> {
        self.get_one(kind.collection()).await
    }

    /// Content pages are singletons the backend upserts on POST.
    async fn update_content_page(
        &self,
        kind: ContentKind,
        updates: &UpdateContentPage,
    ) -> ApiResult<Mutation<ContentPage>> {
        self.send_mutation(Method::POST, kind.collection(), updates)
            .await
    }
}

impl EarningsApi for HttpApi<'_> {
    async fn commission_earnings(&self, query: &ListQuery) -> ApiResult<Page<CommissionEarning>> {
        self.get_list("earnings/commissions", &query.api_params())
            .await
    }

    async fn subscription_earnings(
        &self,
        query: &ListQuery,
    ) -> ApiResult<Page<SubscriptionEarning>> {
        self.get_list("earnings/subscriptions", &query.api_params())
            .await
    }

    async fn list_payouts(&self, query: &ListQuery) -> ApiResult<Page<Payout>> {
        self.get_list("payouts", &query.api_params()).await
    }

    async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        let response = self.request(Method::GET, "dashboard").send().await?;
        let envelope = Self::read_envelope::<DashboardStats>(response).await?;
        Ok(envelope.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn endpoint_joins_without_doubled_slashes() {
        let http = reqwest::Client::new();
        let api = HttpApi::new(&http, "https://api.example.com/v1/", "accessToken", "t");
        assert_eq!(api.endpoint("/users"), "https://api.example.com/v1/users");
        assert_eq!(api.endpoint("users/abc"), "https://api.example.com/v1/users/abc");
    }

    #[test]
    fn list_params_follow_the_wire_contract() {
        let query = ListQuery::new()
            .with_search("netflix")
            .with_created_at(NaiveDate::from_ymd_opt(2025, 7, 1))
            .paginate(2, 10);
        let params = query.api_params();
        assert!(params.contains(&("page", "2".to_string())));
        assert!(params.contains(&("limit", "10".to_string())));
        assert!(params.contains(&("searchTerm", "netflix".to_string())));
        assert!(params.contains(&("createdAt", "2025-07-01T00:00:00.000Z".to_string())));

        // An empty search term is omitted entirely.
        let bare = ListQuery::new().api_params();
        assert!(!bare.iter().any(|(k, _)| *k == "searchTerm"));
        assert!(!bare.iter().any(|(k, _)| *k == "createdAt"));
    }

    #[test]
    fn session_cookie_is_assembled_from_name_and_token() {
        let http = reqwest::Client::new();
        let api = HttpApi::new(&http, "https://api.example.com", "accessToken", "abc123");
        assert_eq!(api.session_cookie, "accessToken=abc123");
    }
}
