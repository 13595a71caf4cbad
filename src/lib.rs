#[cfg(feature = "server")]
use {
    actix_cors::Cors,
    actix_files::Files,
    actix_identity::IdentityMiddleware,
    actix_session::{SessionMiddleware, storage::CookieSessionStore},
    actix_web::cookie::Key,
    actix_web::{App, HttpServer, middleware as actix_middleware, web},
    actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore},
    tera::Tera,
};

#[cfg(feature = "server")]
use crate::{
    middleware::RedirectUnauthorized,
    models::config::ServerConfig,
    routes::accounts::{
        account_details, accounts, save_profile, show_profile, toggle_account_status,
        upload_avatar, vendor_account, vendors,
    },
    routes::catalog::{product_details, products, service_details, services as services_route},
    routes::content::{save_content, show_content},
    routes::earnings::{commission_earnings, export_commission, payouts, subscription_earnings},
    routes::main::{logout, not_assigned, show_index},
    routes::plans::{delete_plan, plans, save_plan},
    routes::support::{delete_ticket, reply_ticket, show_ticket, support},
    routes::types::{delete_type, save_type, types},
};

#[cfg(feature = "client")]
pub mod api;
#[cfg(feature = "client")]
pub mod domain;
#[cfg(feature = "client")]
pub mod error_conversions;
#[cfg(feature = "client")]
pub mod listing;
#[cfg(feature = "client")]
pub mod pagination;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Role required to use any console screen.
pub const SERVICE_ACCESS_ROLE: &str = "admin";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Shared connection pool for outbound calls to the backend API.
    let http_client = reqwest::Client::builder()
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to build HTTP client: {e}")))?;

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    let signin_url = server_config.auth_service_url.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(not_assigned)
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized::to(signin_url.clone()))
                    .service(show_index)
                    .service(accounts)
                    .service(toggle_account_status)
                    .service(account_details)
                    .service(vendors)
                    .service(vendor_account)
                    .service(products)
                    .service(product_details)
                    .service(services_route)
                    .service(service_details)
                    .service(plans)
                    .service(save_plan)
                    .service(delete_plan)
                    .service(support)
                    .service(reply_ticket)
                    .service(delete_ticket)
                    .service(show_ticket)
                    .service(types)
                    .service(save_type)
                    .service(delete_type)
                    .service(show_content)
                    .service(save_content)
                    .service(commission_earnings)
                    .service(export_commission)
                    .service(subscription_earnings)
                    .service(payouts)
                    .service(show_profile)
                    .service(save_profile)
                    .service(upload_avatar)
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(http_client.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
