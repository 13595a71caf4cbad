use validator::Validate;

use crate::SERVICE_ACCESS_ROLE;
use crate::api::{Mutation, SupportApi};
use crate::domain::support::{SupportTicket, TicketReply};
use crate::domain::types::RecordId;
use crate::dto::support::SupportPageData;
use crate::forms::support::{DeleteTicketForm, ReplyTicketForm};
use crate::listing::ListQuery;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::TablePage;
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult, form_error};

/// Loads one page of support tickets.
pub async fn load_support_page<A>(
    api: &A,
    user: &AuthenticatedUser,
    query: ListQuery,
) -> ServiceResult<SupportPageData>
where
    A: SupportApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = api.list_tickets(&query).await?;

    Ok(SupportPageData {
        filters: (&query).into(),
        tickets: TablePage::new(page, query.page),
    })
}

/// Fetches a single ticket for the reply modal.
pub async fn load_ticket<A>(
    api: &A,
    user: &AuthenticatedUser,
    id: &str,
) -> ServiceResult<SupportTicket>
where
    A: SupportApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let id = RecordId::new(id)?;
    api.get_ticket(&id).await?.ok_or(ServiceError::NotFound)
}

/// Validates the reply form and patches the ticket.
///
/// On validation failure nothing is sent; the caller re-renders the modal
/// with the message so the user can retry.
pub async fn reply_to_ticket<A>(
    api: &A,
    user: &AuthenticatedUser,
    form: &ReplyTicketForm,
) -> ServiceResult<Mutation<SupportTicket>>
where
    A: SupportApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate reply form: {e}");
        return Err(form_error(&e));
    }

    let id = RecordId::new(form.id.as_str())?;
    let reply: TicketReply = form.into();

    api.reply_ticket(&id, &reply).await.map_err(Into::into)
}

/// Deletes a ticket.
pub async fn remove_ticket<A>(
    api: &A,
    user: &AuthenticatedUser,
    form: &DeleteTicketForm,
) -> ServiceResult<Mutation<()>>
where
    A: SupportApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let id = RecordId::new(form.id.as_str())?;
    api.delete_ticket(&id).await.map_err(Into::into)
}
