use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::catalog::CatalogKind;
use crate::forms::types::{CatalogTypeForm, DeleteTypeForm};
use crate::dto::ListFilters;
use crate::listing::codec::merge_query_params;
use crate::listing::{ListQuery, Page};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::pagination::TablePage;
use crate::routes::{backend, base_context, ensure_role, redirect, render_template};
use crate::services::types as types_service;

/// `/types/products` and `/types/services` share one set of handlers.
fn parse_kind(slug: &str) -> Option<CatalogKind> {
    match slug {
        "products" => Some(CatalogKind::ProductType),
        "services" => Some(CatalogKind::ServiceType),
        _ => None,
    }
}

#[get("/types/{kind}")]
pub async fn types(
    req: HttpRequest,
    kind: web::Path<String>,
    user: AuthenticatedUser,
    http: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let slug = kind.into_inner();
    let Some(kind) = parse_kind(&slug) else {
        return redirect("/");
    };

    let api = backend(&http, &server_config, &user);
    let query = ListQuery::parse(req.query_string());

    let mut context = base_context(
        &flash_messages,
        &user,
        kind.collection(),
        &server_config.auth_service_url,
    );
    context.insert("kind", &slug);
    context.insert("kind_label", kind.label());
    context.insert(
        "pager_query",
        &merge_query_params(req.query_string(), &[("page", None)]),
    );
    context.insert("filters", &ListFilters::from(&query));

    match types_service::load_types_page(&api, &user, kind, query).await {
        Ok(data) => {
            context.insert("types", &data.types);
        }
        Err(e) => {
            log::error!("Failed to list {}: {e}", kind.collection());
            context.insert("load_error", &e.user_message());
            context.insert("types", &TablePage::<()>::new(Page::default(), 1));
        }
    }

    render_template(&tera, "types/index.html", &context)
}

#[post("/types/{kind}/save")]
pub async fn save_type(
    kind: web::Path<String>,
    user: AuthenticatedUser,
    http: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<CatalogTypeForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let slug = kind.into_inner();
    let Some(kind) = parse_kind(&slug) else {
        return redirect("/");
    };

    let api = backend(&http, &server_config, &user);

    match types_service::save_type(&api, &user, kind, &form).await {
        Ok(mutation) => {
            FlashMessage::success(
                mutation
                    .message
                    .unwrap_or_else(|| format!("{} saved.", kind.label())),
            )
            .send();
        }
        Err(e) => {
            log::error!("Failed to save {}: {e}", kind.collection());
            FlashMessage::error(e.user_message()).send();
        }
    }

    redirect(&format!("/types/{slug}"))
}

#[post("/types/{kind}/delete")]
pub async fn delete_type(
    kind: web::Path<String>,
    user: AuthenticatedUser,
    http: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<DeleteTypeForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let slug = kind.into_inner();
    let Some(kind) = parse_kind(&slug) else {
        return redirect("/");
    };

    let api = backend(&http, &server_config, &user);

    match types_service::remove_type(&api, &user, kind, &form).await {
        Ok(mutation) => {
            FlashMessage::success(
                mutation
                    .message
                    .unwrap_or_else(|| format!("{} deleted.", kind.label())),
            )
            .send();
        }
        Err(e) => {
            log::error!("Failed to delete {}: {e}", kind.collection());
            FlashMessage::error(e.user_message()).send();
        }
    }

    redirect(&format!("/types/{slug}"))
}
