pub mod chat;

use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde_json::json;

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": "1.0.0"
    }))
}

/// Malformed request bodies (invalid JSON, wrong field types) get the same
/// `{"error": ...}` envelope as the handler's own validation failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = json!({ "error": err.to_string() });
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// CORS policy for the chat widget: pre-flight is answered with the caller's
/// origin echoed back, POST allowed and Content-Type permitted.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE])
        .max_age(3600)
}
