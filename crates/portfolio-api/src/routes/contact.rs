use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use portfolio_types::{
    ContactMessage, ListMessagesOptions, NewContactMessage, ReadFlagUpdate, Validated,
};

use crate::{error::ApiResult, extract::JsonBody, state::AppState};

#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    #[serde(default)]
    pub unread: bool,
}

/// Submit the contact form
///
/// The payload is validated here regardless of what the client checked.
/// Nothing is stored unless every field passes.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = NewContactMessage,
    responses(
        (status = 201, description = "Message stored", body = ContactMessage),
        (status = 400, description = "Invalid fields", body = crate::error::ErrorBody),
        (status = 503, description = "Storage unavailable, retry later", body = crate::error::ErrorBody)
    ),
    tag = "contact"
)]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<NewContactMessage>,
) -> ApiResult<(StatusCode, Json<ContactMessage>)> {
    let input = input.validated().inspect_err(|failure| {
        tracing::info!(fields = ?failure.fields, "Contact submission rejected");
    })?;

    let message = state.persist.create_message(input).await?;
    tracing::info!(id = message.id, "Contact message stored");

    Ok((StatusCode::CREATED, Json(message)))
}

/// List contact messages (admin inbox), newest first
#[utoipa::path(
    get,
    path = "/api/contact-messages",
    params(
        ("unread" = Option<bool>, Query, description = "Only unread messages")
    ),
    responses(
        (status = 200, description = "Inbox", body = [ContactMessage])
    ),
    tag = "contact"
)]
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListMessagesQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<ContactMessage>>> {
    let Query(query) = query?;
    let options = ListMessagesOptions {
        unread_only: query.unread,
    };

    let messages = state.persist.list_messages(&options).await?;
    Ok(Json(messages))
}

/// Mark a contact message read or unread
#[utoipa::path(
    patch,
    path = "/api/contact-messages/{id}/read",
    params(
        ("id" = i64, Path, description = "Message ID")
    ),
    request_body = ReadFlagUpdate,
    responses(
        (status = 200, description = "Message updated", body = ContactMessage),
        (status = 404, description = "Message not found", body = crate::error::ErrorBody)
    ),
    tag = "contact"
)]
pub async fn set_read(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    JsonBody(ReadFlagUpdate { read }): JsonBody<ReadFlagUpdate>,
) -> ApiResult<Json<ContactMessage>> {
    let Path(id) = id?;

    let message = state.persist.set_message_read(id, read).await?;
    tracing::info!(id, read, "Contact message read flag set");

    Ok(Json(message))
}
