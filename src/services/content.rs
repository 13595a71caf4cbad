use validator::Validate;

use crate::SERVICE_ACCESS_ROLE;
use crate::api::{ContentApi, Mutation};
use crate::domain::content::{ContentKind, ContentPage, UpdateContentPage};
use crate::domain::types::RichText;
use crate::dto::content::ContentPageData;
use crate::forms::content::ContentForm;
use crate::models::auth::AuthenticatedUser;
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult, form_error};

/// Loads a static page for its editor screen. A page that was never created
/// renders as an empty editor, not an error.
pub async fn load_content_page<A>(
    api: &A,
    user: &AuthenticatedUser,
    kind: ContentKind,
) -> ServiceResult<ContentPageData>
where
    A: ContentApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = api.content_page(kind).await?;
    Ok(ContentPageData { kind, page })
}

/// Validates, sanitizes and upserts a static page body.
pub async fn save_content_page<A>(
    api: &A,
    user: &AuthenticatedUser,
    kind: ContentKind,
    form: &ContentForm,
) -> ServiceResult<Mutation<ContentPage>>
where
    A: ContentApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate content form: {e}");
        return Err(form_error(&e));
    }

    let updates = UpdateContentPage {
        description: RichText::new(form.description.as_str())?,
    };

    api.update_content_page(kind, &updates)
        .await
        .map_err(Into::into)
}
