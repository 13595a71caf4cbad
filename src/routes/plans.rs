use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::SERVICE_ACCESS_ROLE;
use crate::forms::plans::{DeletePlanForm, PlanForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{backend, base_context, ensure_role, redirect, render_template};
use crate::services::plans as plans_service;

#[get("/plans")]
pub async fn plans(
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
        "plans",
        &server_config.auth_service_url,
    );

    match plans_service::load_plans_page(&api, &user).await {
        Ok(data) => context.insert("plans", &data.plans),
        Err(e) => {
            log::error!("Failed to list plans: {e}");
            context.insert("load_error", &e.user_message());
            context.insert("plans", &Vec::<()>::new());
        }
    }

    render_template(&tera, "plans/index.html", &context)
}

#[post("/plans/save")]
pub async fn save_plan(
    user: AuthenticatedUser,
    http: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<PlanForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let api = backend(&http, &server_config, &user);

    match plans_service::save_plan(&api, &user, &form).await {
        Ok(mutation) => {
            FlashMessage::success(
                mutation
                    .message
                    .unwrap_or_else(|| "Subscription plan saved.".to_string()),
            )
            .send();
        }
        Err(e) => {
            log::error!("Failed to save plan: {e}");
            FlashMessage::error(e.user_message()).send();
        }
    }

    redirect("/plans")
}

#[post("/plans/delete")]
pub async fn delete_plan(
    user: AuthenticatedUser,
    http: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<DeletePlanForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let api = backend(&http, &server_config, &user);

    match plans_service::remove_plan(&api, &user, &form).await {
        Ok(mutation) => {
            FlashMessage::success(
                mutation
                    .message
                    .unwrap_or_else(|| "Subscription plan deleted.".to_string()),
            )
            .send();
        }
        Err(e) => {
            log::error!("Failed to delete plan {}: {e}", form.id);
            FlashMessage::error(e.user_message()).send();
        }
    }

    redirect("/plans")
}
