//! Chat relay route.

use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::warn;
use wire::ErrorBody;

use crate::services::relay::{self, RelayError};
use crate::state::AppState;

/// Message shown for every failure that is not the caller's fault.
pub const GENERIC_FAILURE: &str = "Failed to process your request";

/// `POST /api/chat`: relay the latest message and return the normalized reply.
///
/// The body is read as raw bytes, and its rejection is taken by value, so
/// malformed JSON and oversized bodies get the same `{ error }` shape as
/// every other failure instead of Axum's plain-text rejection.
pub async fn relay_chat(State(state): State<AppState>, body: Result<Bytes, BytesRejection>) -> Response {
    let result = match body {
        Ok(body) => match wire::decode_request(&body) {
            Ok(request) => relay::relay(state.webhook.as_ref(), &request, state.config.strict_status).await,
            Err(e) => Err(e.into()),
        },
        Err(rejection) => Err(RelayError::BodyRejected {
            status: rejection.status().as_u16(),
            message: rejection.body_text(),
        }),
    };

    match result {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(e) => {
            warn!(error = %e, "chat: relay failed");
            let status = relay_error_to_status(&e);
            (status, Json(error_body(&e))).into_response()
        }
    }
}

pub(crate) fn relay_error_to_status(err: &RelayError) -> StatusCode {
    match err {
        RelayError::Malformed(_) => StatusCode::BAD_REQUEST,
        RelayError::BodyRejected { status, .. } => StatusCode::from_u16(*status)
            .ok()
            .filter(StatusCode::is_client_error)
            .unwrap_or(StatusCode::BAD_REQUEST),
        RelayError::Webhook(_) | RelayError::WebhookStatus { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_body(err: &RelayError) -> ErrorBody {
    match err {
        RelayError::Malformed(e) => ErrorBody::new(e.to_string()),
        RelayError::BodyRejected { message, .. } => ErrorBody::new(message.clone()),
        RelayError::Webhook(_) | RelayError::WebhookStatus { .. } => ErrorBody::new(GENERIC_FAILURE),
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
