//! Route handlers and the helpers shared between them.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::api::http::HttpApi;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;

pub mod accounts;
pub mod catalog;
pub mod content;
pub mod earnings;
pub mod main;
pub mod plans;
pub mod support;
pub mod types;

/// Page size applied to every table screen.
pub use crate::listing::DEFAULT_PAGE_SIZE as DEFAULT_ITEMS_PER_PAGE;

/// Builds the per-request backend adapter carrying the caller's session.
pub fn backend<'a>(
    http: &'a reqwest::Client,
    config: &'a ServerConfig,
    user: &AuthenticatedUser,
) -> HttpApi<'a> {
    HttpApi::new(
        http,
        &config.api_base_url,
        &config.session_cookie,
        &user.token,
    )
}

/// Checks whether the given role is present in the user's role list.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|r| r == role)
}

/// Guards a handler: users without the role are bounced to `redirect_to`
/// (the not-assigned page by default) with a flash explaining why.
pub fn ensure_role(
    user: &AuthenticatedUser,
    role: &str,
    redirect_to: Option<&str>,
) -> Result<(), HttpResponse> {
    if check_role(role, &user.roles) {
        Ok(())
    } else {
        FlashMessage::error("You are not allowed to do that.").send();
        Err(redirect(redirect_to.unwrap_or("/na")))
    }
}

/// 303 redirect; mutations always answer POSTs with one.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Maps flash levels onto the alert classes the templates use.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context keys every template expects: alerts, the signed-in user, the
/// active nav entry and the auth service home link.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: &AuthenticatedUser,
    current_page: &str,
    home_url: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", user);
    context.insert("current_page", current_page);
    context.insert("home_url", home_url);
    context
}

pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template {name}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
