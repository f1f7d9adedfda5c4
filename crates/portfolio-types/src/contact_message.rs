use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::{email_address, not_blank, Validated};

/// Stored contact-form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Triage state, owned by the server. New messages start unread.
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn from_new(id: i64, input: NewContactMessage, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            subject: input.subject,
            message: input.message,
            read: false,
            created_at: now,
        }
    }
}

/// Contact-form payload. Exactly the four client-supplied fields; `read`,
/// `id` and `createdAt` are never accepted from the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct NewContactMessage {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "email_address"))]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub subject: String,
    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

impl NewContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl Validated for NewContactMessage {
    fn normalize(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.subject = self.subject.trim().to_string();
        self.message = self.message.trim().to_string();
        self
    }
}

/// Body of the admin read-flag toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReadFlagUpdate {
    pub read: bool,
}
