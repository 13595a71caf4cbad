use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::RecordId;

/// A message submitted through the public contact form, replied to from the
/// customer-support screen.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub message_reply: Option<String>,
    #[serde(default)]
    pub follow: Option<String>,
    #[serde(default)]
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SupportTicket {
    pub fn is_replied(&self) -> bool {
        self.message_reply
            .as_deref()
            .is_some_and(|r| !r.trim().is_empty())
    }
}

/// Body of the reply mutation (`PATCH /supports/{id}`).
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketReply {
    pub message_reply: String,
}
