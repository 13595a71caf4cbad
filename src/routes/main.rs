use actix_identity::Identity;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::SERVICE_ACCESS_ROLE;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{backend, base_context, ensure_role, redirect, render_template};
use crate::services::main as main_service;

#[get("/")]
pub async fn show_index(
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

    let mut context = base_context(
        &flash_messages,
        &user,
        "dashboard",
        &server_config.auth_service_url,
    );

    match main_service::load_dashboard(&api, &user).await {
        Ok(data) => {
            context.insert("stats", &data.stats);
            context.insert("recent_users", &data.recent_users);
        }
        Err(e) => {
            log::error!("Failed to load dashboard: {e}");
            context.insert("load_error", &e.user_message());
        }
    }

    render_template(&tera, "main/index.html", &context)
}

#[get("/na")]
pub async fn not_assigned(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(
        &flash_messages,
        &user,
        "index",
        &server_config.auth_service_url,
    );

    render_template(&tera, "main/not_assigned.html", &context)
}

#[post("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/")
}
