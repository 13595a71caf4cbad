use actix_web::{HttpRequest, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::types::RecordId;
use crate::dto::ListFilters;
use crate::listing::codec::merge_query_params;
use crate::listing::{ListQuery, Page};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::pagination::TablePage;
use crate::routes::{backend, base_context, ensure_role, redirect, render_template};
use crate::services::catalog as catalog_service;

#[derive(Deserialize)]
struct ScopeParams {
    /// Restricts the list to one vendor's records.
    #[serde(rename = "vendorId")]
    vendor_id: Option<String>,
}

impl ScopeParams {
    /// A malformed vendor id filter fails open: the list is unscoped.
    fn record_id(&self) -> Option<RecordId> {
        self.vendor_id
            .as_deref()
            .and_then(|id| RecordId::new(id).ok())
    }
}

#[get("/products")]
pub async fn products(
    req: HttpRequest,
    params: web::Query<ScopeParams>,
    user: AuthenticatedUser,
    http: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let api = backend(&http, &server_config, &user);
    let query = ListQuery::parse(req.query_string());

    let mut context = base_context(
        &flash_messages,
        &user,
        "products",
        &server_config.auth_service_url,
    );
    context.insert(
        "pager_query",
        &merge_query_params(req.query_string(), &[("page", None)]),
    );
    context.insert("filters", &ListFilters::from(&query));

    match catalog_service::load_products_page(&api, &user, query, params.record_id()).await {
        Ok(data) => {
            context.insert("products", &data.products);
        }
        Err(e) => {
            log::error!("Failed to list products: {e}");
            context.insert("load_error", &e.user_message());
            context.insert("products", &TablePage::<()>::new(Page::default(), 1));
        }
    }

    render_template(&tera, "catalog/products.html", &context)
}

#[get("/products/{id}")]
pub async fn product_details(
    id: web::Path<String>,
    user: AuthenticatedUser,
    http: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let api = backend(&http, &server_config, &user);

    let product = match catalog_service::load_product(&api, &user, &id).await {
        Ok(product) => product,
        Err(e) => {
            log::error!("Failed to load product {id}: {e}");
            FlashMessage::error(e.user_message()).send();
            return redirect("/products");
        }
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "products",
        &server_config.auth_service_url,
    );
    context.insert("product", &product);

    render_template(&tera, "catalog/product_details.html", &context)
}

#[get("/services")]
pub async fn services(
    req: HttpRequest,
    params: web::Query<ScopeParams>,
    user: AuthenticatedUser,
    http: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let api = backend(&http, &server_config, &user);
    let query = ListQuery::parse(req.query_string());

    let mut context = base_context(
        &flash_messages,
        &user,
        "services",
        &server_config.auth_service_url,
    );
    context.insert(
        "pager_query",
        &merge_query_params(req.query_string(), &[("page", None)]),
    );
    context.insert("filters", &ListFilters::from(&query));

    match catalog_service::load_services_page(&api, &user, query, params.record_id()).await {
        Ok(data) => {
            context.insert("services", &data.services);
        }
        Err(e) => {
            log::error!("Failed to list services: {e}");
            context.insert("load_error", &e.user_message());
            context.insert("services", &TablePage::<()>::new(Page::default(), 1));
        }
    }

    render_template(&tera, "catalog/services.html", &context)
}

#[get("/services/{id}")]
pub async fn service_details(
    id: web::Path<String>,
    user: AuthenticatedUser,
    http: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let api = backend(&http, &server_config, &user);

    let service = match catalog_service::load_service(&api, &user, &id).await {
        Ok(service) => service,
        Err(e) => {
            log::error!("Failed to load service {id}: {e}");
            FlashMessage::error(e.user_message()).send();
            return redirect("/services");
        }
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "services",
        &server_config.auth_service_url,
    );
    context.insert("service", &service);

    render_template(&tera, "catalog/service_details.html", &context)
}
