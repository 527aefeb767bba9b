//! Contact form route handlers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use delights_core::{ContactMessage, Email, clip};

use super::Ack;
use crate::error::{AppError, Result};
use crate::middleware::{Payload, RequireAdmin};
use crate::state::AppState;
use crate::store::NewContactMessage;

/// Contact form request body.
#[derive(Debug, Default, Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactPayload {
    fn into_new(self) -> Result<NewContactMessage> {
        let name = self.name.as_deref().unwrap_or("").trim();
        let email = self.email.as_deref().unwrap_or("").trim();
        let message = self.message.as_deref().unwrap_or("").trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(AppError::validation(
                "Name, email, and message are required",
            ));
        }

        let email = Email::parse(&clip(email, Email::MAX_LENGTH))
            .map_err(|_| AppError::validation("Invalid email address"))?;

        Ok(NewContactMessage {
            name: clip(name, ContactMessage::MAX_NAME),
            email,
            message: clip(message, ContactMessage::MAX_MESSAGE),
        })
    }
}

/// POST /api/contact (public)
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    Payload(body): Payload<ContactPayload>,
) -> Result<(StatusCode, Json<Ack>)> {
    let message = state.store().create_contact_message(body.into_new()?).await?;
    tracing::info!(id = %message.id, "contact message received");
    Ok((StatusCode::CREATED, Json(Ack::ok())))
}

/// GET /api/contact (admin), newest first.
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>> {
    Ok(Json(state.store().list_contact_messages().await?))
}
