use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use validator::Validate;

use super::crud::{MessageCrud, MessageError};
use super::model::ContactMessage;
use super::schema::ContactMessageCreate;
use crate::modules::shared::{
    error_response, validation_error, ApiError, AppJson, MessageResponse,
};
use crate::AppState;

fn message_error(e: MessageError) -> ApiError {
    error_response(e.status_code(), &e)
}

// =============================================================================
// POST /messages - public contact form
// =============================================================================

pub async fn create_message(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<ContactMessageCreate>,
) -> Result<Json<ContactMessage>, ApiError> {
    req.validate().map_err(validation_error)?;

    let crud = MessageCrud::new(state.db.clone());
    let message = crud.create(req).await.map_err(message_error)?;
    state.metrics.record_contact_message(message.urgency.as_str());

    Ok(Json(message))
}

// =============================================================================
// GET /messages
// =============================================================================

pub async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    let crud = MessageCrud::new(state.db.clone());
    let messages = crud.list().await.map_err(message_error)?;

    Ok(Json(messages))
}

// =============================================================================
// DELETE /messages/{id}
// =============================================================================

pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let crud = MessageCrud::new(state.db.clone());
    crud.delete(&id).await.map_err(message_error)?;

    Ok(MessageResponse::new("Message deleted successfully"))
}

// =============================================================================
// PUT /messages/{id}/read
// =============================================================================

pub async fn mark_message_read(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let crud = MessageCrud::new(state.db.clone());
    crud.mark_read(&id).await.map_err(message_error)?;

    Ok(MessageResponse::new("Message marked as read"))
}
