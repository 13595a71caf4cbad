use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::SERVICE_ACCESS_ROLE;
use crate::forms::support::{DeleteTicketForm, ReplyTicketForm};
use crate::dto::ListFilters;
use crate::listing::codec::merge_query_params;
use crate::listing::{ListQuery, Page};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::pagination::TablePage;
use crate::routes::{backend, base_context, ensure_role, redirect, render_template};
use crate::services::support as support_service;

#[get("/support")]
pub async fn support(
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
        "support",
        &server_config.auth_service_url,
    );
    context.insert(
        "pager_query",
        &merge_query_params(req.query_string(), &[("page", None)]),
    );
    context.insert("filters", &ListFilters::from(&query));

    match support_service::load_support_page(&api, &user, query).await {
        Ok(data) => {
            context.insert("tickets", &data.tickets);
        }
        Err(e) => {
            log::error!("Failed to list support tickets: {e}");
            context.insert("load_error", &e.user_message());
            context.insert("tickets", &TablePage::<()>::new(Page::default(), 1));
        }
    }

    render_template(&tera, "support/index.html", &context)
}

#[get("/support/{id}")]
pub async fn show_ticket(
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

    let ticket = match support_service::load_ticket(&api, &user, &id).await {
        Ok(ticket) => ticket,
        Err(e) => {
            log::error!("Failed to load ticket {id}: {e}");
            FlashMessage::error(e.user_message()).send();
            return redirect("/support");
        }
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "support",
        &server_config.auth_service_url,
    );
    context.insert("ticket", &ticket);

    render_template(&tera, "support/reply.html", &context)
}

#[post("/support/reply")]
pub async fn reply_ticket(
    user: AuthenticatedUser,
    http: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<ReplyTicketForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let api = backend(&http, &server_config, &user);

    match support_service::reply_to_ticket(&api, &user, &form).await {
        Ok(mutation) => {
            FlashMessage::success(
                mutation
                    .message
                    .unwrap_or_else(|| "Support message replied successfully.".to_string()),
            )
            .send();
            redirect("/support")
        }
        Err(e) => {
            log::error!("Failed to reply to ticket {}: {e}", form.id);
            FlashMessage::error(e.user_message()).send();
            // Back to the reply form so the user can retry.
            redirect(&format!("/support/{}", form.id))
        }
    }
}

#[post("/support/delete")]
pub async fn delete_ticket(
    user: AuthenticatedUser,
    http: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<DeleteTicketForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let api = backend(&http, &server_config, &user);

    match support_service::remove_ticket(&api, &user, &form).await {
        Ok(mutation) => {
            FlashMessage::success(
                mutation
                    .message
                    .unwrap_or_else(|| "Support message deleted.".to_string()),
            )
            .send();
        }
        Err(e) => {
            log::error!("Failed to delete ticket {}: {e}", form.id);
            FlashMessage::error(e.user_message()).send();
        }
    }

    redirect("/support")
}
