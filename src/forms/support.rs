use serde::Deserialize;
use validator::Validate;

use crate::domain::support::TicketReply;

#[derive(Deserialize, Validate)]
/// Reply posted from the support-ticket modal.
pub struct ReplyTicketForm {
    /// Ticket identifier.
    pub id: String,
    #[validate(length(min = 1, message = "Reply message is required"))]
    pub message_reply: String,
}

impl From<&ReplyTicketForm> for TicketReply {
    fn from(form: &ReplyTicketForm) -> Self {
        TicketReply {
            message_reply: form.message_reply.trim().to_string(),
        }
    }
}

#[derive(Deserialize, Validate)]
/// Delete confirmation for a support ticket.
pub struct DeleteTicketForm {
    pub id: String,
}
