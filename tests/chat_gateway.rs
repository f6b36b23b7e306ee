use actix_web::http::{header, Method, StatusCode};
use actix_web::{test, web, App};
use serde_json::{json, Value};

use heditra_backend::handlers;
use heditra_backend::i18n::Locale;
use heditra_backend::services::fallback::fallback_response;
use heditra_backend::state::{AppState, GroqConfig};

fn state_without_key() -> web::Data<AppState> {
    web::Data::new(AppState::new(GroqConfig {
        api_key: None,
        model: "llama-3.1-8b-instant".to_string(),
        api_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
    }))
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(handlers::cors())
                .app_data($state)
                .app_data(handlers::json_config())
                .route("/health", web::get().to(handlers::health_check))
                .route("/api/chat", web::post().to(handlers::chat::send_message)),
        )
        .await
    };
}

#[actix_web::test]
async fn greeting_without_credential_serves_english_fallback() {
    let app = test_app!(state_without_key());

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "message": "Hello", "language": "en" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(
        body["response"].as_str().unwrap(),
        fallback_response("Hello", Locale::En, &[])
    );
}

#[actix_web::test]
async fn name_recall_from_round_tripped_history() {
    let app = test_app!(state_without_key());

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({
            "message": "what was my name?",
            "language": "en",
            "conversationHistory": [
                { "role": "user", "content": "I am John" }
            ]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], json!(false));
    assert!(body["response"].as_str().unwrap().contains("John"));
}

#[actix_web::test]
async fn empty_message_is_rejected() {
    let app = test_app!(state_without_key());

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "message": "", "language": "en" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert!(body["error"].as_str().unwrap().contains("Message"));
}

#[actix_web::test]
async fn whitespace_only_message_is_rejected() {
    let app = test_app!(state_without_key());

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "message": "   ", "language": "en" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn missing_message_is_rejected() {
    let app = test_app!(state_without_key());

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "language": "en" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn non_string_message_gets_json_error_envelope() {
    let app = test_app!(state_without_key());

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "message": 5, "language": "en" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn unsupported_language_is_rejected() {
    let app = test_app!(state_without_key());

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "message": "Hello", "language": "fr" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert!(body["error"].as_str().unwrap().contains("language"));
}

#[actix_web::test]
async fn missing_language_is_rejected() {
    let app = test_app!(state_without_key());

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "message": "Hello" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn arabic_request_gets_arabic_fallback() {
    let app = test_app!(state_without_key());

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "message": "مرحبا", "language": "ar" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], json!(false));
    assert!(body["response"].as_str().unwrap().contains("هادترا"));
}

#[actix_web::test]
async fn upstream_failure_serves_fallback_reply() {
    // A configured key pointing at a dead endpoint: the request errors and
    // the response must equal the pure fallback output.
    let state = web::Data::new(AppState::new(GroqConfig {
        api_key: Some("test-key".to_string()),
        model: "llama-3.1-8b-instant".to_string(),
        api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
    }));
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "message": "what services do you offer?", "language": "en" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(
        body["response"].as_str().unwrap(),
        fallback_response("what services do you offer?", Locale::En, &[])
    );
}

#[actix_web::test]
async fn preflight_echoes_origin_and_allows_post() {
    let app = test_app!(state_without_key());

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/chat")
        .insert_header((header::ORIGIN, "http://localhost:5173"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert!(res.status().is_success());

    let allow_origin = res
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = res
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(allow_methods.contains("POST"));
}

#[actix_web::test]
async fn health_endpoint_reports_ok() {
    let app = test_app!(state_without_key());

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], json!("OK"));
}
