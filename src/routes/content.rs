use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::content::ContentKind;
use crate::forms::content::ContentForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{backend, base_context, ensure_role, redirect, render_template};
use crate::services::content as content_service;

#[get("/content/{kind}")]
pub async fn show_content(
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

    let Some(kind) = ContentKind::from_slug(&kind) else {
        return redirect("/");
    };

    let api = backend(&http, &server_config, &user);

    let mut context = base_context(
        &flash_messages,
        &user,
        kind.slug(),
        &server_config.auth_service_url,
    );
    context.insert("kind", &kind.slug());
    context.insert("title", kind.title());

    match content_service::load_content_page(&api, &user, kind).await {
        Ok(data) => context.insert("page", &data.page),
        Err(e) => {
            log::error!("Failed to load content page {}: {e}", kind.slug());
            context.insert("load_error", &e.user_message());
        }
    }

    render_template(&tera, "content/edit.html", &context)
}

#[post("/content/{kind}")]
pub async fn save_content(
    kind: web::Path<String>,
    user: AuthenticatedUser,
    http: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<ContentForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let slug = kind.into_inner();
    let Some(kind) = ContentKind::from_slug(&slug) else {
        return redirect("/");
    };

    let api = backend(&http, &server_config, &user);

    match content_service::save_content_page(&api, &user, kind, &form).await {
        Ok(mutation) => {
            FlashMessage::success(
                mutation
                    .message
                    .unwrap_or_else(|| format!("{} updated.", kind.title())),
            )
            .send();
        }
        Err(e) => {
            log::error!("Failed to save content page {}: {e}", kind.slug());
            FlashMessage::error(e.user_message()).send();
        }
    }

    redirect(&format!("/content/{slug}"))
}
