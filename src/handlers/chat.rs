use actix_web::{web, HttpResponse};
use futures_util::FutureExt;
use log::{error, warn};
use serde_json::json;
use std::panic::AssertUnwindSafe;

use crate::i18n::Locale;
use crate::models::ChatRequest;
use crate::services::chat::generate_response;
use crate::state::AppState;

const INTERNAL_ERROR_REPLY: &str =
    "I apologize, but I encountered an error. Please try again or contact us directly.";

/// POST /api/chat. Validates the body, delegates to the resolver and relays
/// its `{response, success}` pair. The resolver's diagnostic never reaches
/// the client; it is logged here.
pub async fn send_message(
    data: web::Json<ChatRequest>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let chat_req = data.into_inner();

    let message = chat_req.message.as_deref().map(str::trim).unwrap_or("");
    if message.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Message is required"
        }));
    }

    let locale = match chat_req.language.as_deref().and_then(Locale::from_code) {
        Some(locale) => locale,
        None => {
            return HttpResponse::BadRequest().json(json!({
                "error": "Valid language is required (en or ar)"
            }));
        }
    };

    let resolved = AssertUnwindSafe(generate_response(
        &state,
        message,
        locale,
        &chat_req.conversation_history,
    ))
    .catch_unwind()
    .await;

    match resolved {
        Ok(outcome) => {
            if let Some(ref err) = outcome.error {
                warn!("chat resolved via fallback: {}", err);
            }
            HttpResponse::Ok().json(json!({
                "response": outcome.response,
                "success": outcome.success
            }))
        }
        Err(_) => {
            error!("chat resolver panicked");
            HttpResponse::InternalServerError().json(json!({
                "error": "Internal server error",
                "response": INTERNAL_ERROR_REPLY
            }))
        }
    }
}
