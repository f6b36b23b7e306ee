use actix_web::middleware::NormalizePath;
use actix_web::{web, App, HttpServer};
use log::{info, warn};

use heditra_backend::handlers;
use heditra_backend::state::{AppState, GroqConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .unwrap_or(8080);

    let groq = GroqConfig::from_env();
    if groq.api_key.is_none() {
        warn!("GROQ_API_KEY not configured, chat will use keyword fallback responses");
        warn!("set GROQ_API_KEY to enable AI responses");
    }
    let app_state = web::Data::new(AppState::new(groq));

    info!("starting server on port {}", port);

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(handlers::cors())
            .app_data(app_state.clone())
            .app_data(handlers::json_config())
            .route("/health", web::get().to(handlers::health_check))
            .route("/api/chat", web::post().to(handlers::chat::send_message))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
