use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::SERVICE_ACCESS_ROLE;
use crate::dto::ListFilters;
use crate::listing::codec::merge_query_params;
use crate::listing::{ListQuery, Page};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::pagination::TablePage;
use crate::routes::{backend, base_context, ensure_role, render_template};
use crate::services::earnings as earnings_service;

#[get("/earnings/commission")]
pub async fn commission_earnings(
    req: HttpRequest,
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
        "earnings",
        &server_config.auth_service_url,
    );
    context.insert("tab", "commission");
    context.insert(
        "pager_query",
        &merge_query_params(req.query_string(), &[("page", None)]),
    );
    context.insert("filters", &ListFilters::from(&query));

    match earnings_service::load_commission_page(&api, &user, query).await {
        Ok(data) => {
            context.insert("earnings", &data.earnings);
        }
        Err(e) => {
            log::error!("Failed to list commission earnings: {e}");
            context.insert("load_error", &e.user_message());
            context.insert("earnings", &TablePage::<()>::new(Page::default(), 1));
        }
    }

    render_template(&tera, "earnings/commission.html", &context)
}

#[get("/earnings/subscription")]
pub async fn subscription_earnings(
    req: HttpRequest,
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
        "earnings",
        &server_config.auth_service_url,
    );
    context.insert("tab", "subscription");
    context.insert(
        "pager_query",
        &merge_query_params(req.query_string(), &[("page", None)]),
    );
    context.insert("filters", &ListFilters::from(&query));

    match earnings_service::load_subscription_page(&api, &user, query).await {
        Ok(data) => {
            context.insert("earnings", &data.earnings);
        }
        Err(e) => {
            log::error!("Failed to list subscription earnings: {e}");
            context.insert("load_error", &e.user_message());
            context.insert("earnings", &TablePage::<()>::new(Page::default(), 1));
        }
    }

    render_template(&tera, "earnings/subscription.html", &context)
}

/// Downloads the commission earnings matching the current filter.
#[get("/earnings/commission/export")]
pub async fn export_commission(
    req: HttpRequest,
    user: AuthenticatedUser,
    http: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let api = backend(&http, &server_config, &user);
    let query = ListQuery::parse(req.query_string());

    match earnings_service::export_commission_csv(&api, &user, &query).await {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                "attachment; filename=\"commission-earnings.csv\"",
            ))
            .body(csv),
        Err(e) => {
            log::error!("Failed to export commission earnings: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/payouts")]
pub async fn payouts(
    req: HttpRequest,
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
        "payouts",
        &server_config.auth_service_url,
    );
    context.insert(
        "pager_query",
        &merge_query_params(req.query_string(), &[("page", None)]),
    );
    context.insert("filters", &ListFilters::from(&query));

    match earnings_service::load_payouts_page(&api, &user, query).await {
        Ok(data) => {
            context.insert("payouts", &data.payouts);
        }
        Err(e) => {
            log::error!("Failed to list payouts: {e}");
            context.insert("load_error", &e.user_message());
            context.insert("payouts", &TablePage::<()>::new(Page::default(), 1));
        }
    }

    render_template(&tera, "earnings/payouts.html", &context)
}
