use actix_multipart::form::MultipartForm;
use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::SERVICE_ACCESS_ROLE;
use crate::api::VendorApi;
use crate::forms::accounts::{AvatarUploadForm, ProfileForm, ToggleStatusForm};
use crate::dto::ListFilters;
use crate::listing::codec::merge_query_params;
use crate::listing::{ListQuery, Page};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::pagination::TablePage;
use crate::routes::{backend, base_context, ensure_role, redirect, render_template};
use crate::services::accounts as accounts_service;

#[get("/accounts")]
pub async fn accounts(
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
        "accounts",
        &server_config.auth_service_url,
    );
    context.insert(
        "pager_query",
        &merge_query_params(req.query_string(), &[("page", None)]),
    );
    context.insert("filters", &ListFilters::from(&query));

    match accounts_service::load_users_page(&api, &user, query).await {
        Ok(data) => {
            context.insert("users", &data.users);
        }
        Err(e) => {
            log::error!("Failed to list accounts: {e}");
            context.insert("load_error", &e.user_message());
            context.insert("users", &TablePage::<()>::new(Page::default(), 1));
        }
    }

    render_template(&tera, "accounts/index.html", &context)
}

#[get("/accounts/{id}")]
pub async fn account_details(
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

    let account = match accounts_service::load_account(&api, &user, &id).await {
        Ok(account) => account,
        Err(e) => {
            log::error!("Failed to load account {id}: {e}");
            FlashMessage::error(e.user_message()).send();
            return redirect("/accounts");
        }
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "accounts",
        &server_config.auth_service_url,
    );
    context.insert("account", &account);
    context.insert("can_toggle", &account.status.toggled().is_some());

    render_template(&tera, "accounts/details.html", &context)
}

#[post("/accounts/status")]
pub async fn toggle_account_status(
    user: AuthenticatedUser,
    http: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<ToggleStatusForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let api = backend(&http, &server_config, &user);

    match accounts_service::toggle_account_status(&api, &user, &form.id).await {
        Ok(mutation) => {
            FlashMessage::success(
                mutation
                    .message
                    .unwrap_or_else(|| "Account status updated.".to_string()),
            )
            .send();
        }
        Err(e) => {
            log::error!("Failed to toggle account status: {e}");
            FlashMessage::error(e.user_message()).send();
        }
    }

    redirect("/accounts")
}

#[get("/vendors")]
pub async fn vendors(
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
        "vendors",
        &server_config.auth_service_url,
    );
    context.insert(
        "pager_query",
        &merge_query_params(req.query_string(), &[("page", None)]),
    );
    context.insert("filters", &ListFilters::from(&query));

    match accounts_service::load_vendors_page(&api, &user, query).await {
        Ok(data) => {
            context.insert("vendors", &data.vendors);
        }
        Err(e) => {
            log::error!("Failed to list vendors: {e}");
            context.insert("load_error", &e.user_message());
            context.insert("vendors", &TablePage::<()>::new(Page::default(), 1));
        }
    }

    render_template(&tera, "accounts/vendors.html", &context)
}

#[get("/vendors/{email}")]
pub async fn vendor_account(
    req: HttpRequest,
    email: web::Path<String>,
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

    let data = match accounts_service::load_vendor_account(
        &api,
        &user,
        &email,
        query.clone(),
        query.clone(),
    )
    .await
    {
        Ok(data) => data,
        Err(e) => {
            log::error!("Failed to load vendor account {email}: {e}");
            FlashMessage::error(e.user_message()).send();
            return redirect("/vendors");
        }
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "vendors",
        &server_config.auth_service_url,
    );
    context.insert(
        "pager_query",
        &merge_query_params(req.query_string(), &[("page", None)]),
    );
    context.insert("filters", &ListFilters::from(&query));
    context.insert("vendor", &data.vendor);
    context.insert("products", &data.products);
    context.insert("services", &data.services);

    render_template(&tera, "accounts/vendor_details.html", &context)
}

#[get("/profile")]
pub async fn show_profile(
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
        "profile",
        &server_config.auth_service_url,
    );

    match api.vendor_profile(&user.email).await {
        Ok(profile) => context.insert("profile", &profile),
        Err(e) => {
            log::error!("Failed to load profile: {e}");
            context.insert("load_error", &crate::services::GENERIC_ERROR);
        }
    }

    render_template(&tera, "accounts/profile.html", &context)
}

#[post("/profile")]
pub async fn save_profile(
    user: AuthenticatedUser,
    http: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<ProfileForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let api = backend(&http, &server_config, &user);

    match accounts_service::update_own_profile(&api, &user, &form).await {
        Ok(mutation) => {
            FlashMessage::success(
                mutation
                    .message
                    .unwrap_or_else(|| "Profile updated.".to_string()),
            )
            .send();
        }
        Err(e) => {
            log::error!("Failed to update profile: {e}");
            FlashMessage::error(e.user_message()).send();
        }
    }

    redirect("/profile")
}

#[post("/profile/avatar")]
pub async fn upload_avatar(
    user: AuthenticatedUser,
    http: web::Data<reqwest::Client>,
    server_config: web::Data<ServerConfig>,
    MultipartForm(form): MultipartForm<AvatarUploadForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let api = backend(&http, &server_config, &user);

    let file_name = form
        .image
        .file_name
        .clone()
        .unwrap_or_else(|| "avatar".to_string());

    let bytes = match std::fs::read(form.image.file.path()) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("Failed to read uploaded avatar: {e}");
            FlashMessage::error("The uploaded image could not be read.").send();
            return redirect("/profile");
        }
    };

    match accounts_service::update_own_avatar(&api, &user, &file_name, bytes).await {
        Ok(mutation) => {
            FlashMessage::success(
                mutation
                    .message
                    .unwrap_or_else(|| "Avatar updated.".to_string()),
            )
            .send();
        }
        Err(e) => {
            log::error!("Failed to upload avatar: {e}");
            FlashMessage::error(e.user_message()).send();
        }
    }

    redirect("/profile")
}
