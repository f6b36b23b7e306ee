use reqwest::Client;

const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Immutable provider configuration, read once at startup. A missing or blank
/// API key means the process runs in fallback mode for its whole lifetime.
#[derive(Clone, Debug)]
pub struct GroqConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
}

impl GroqConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_url = std::env::var("GROQ_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self { api_key, model, api_url }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub groq: GroqConfig,
    pub http: Client,
}

impl AppState {
    pub fn new(groq: GroqConfig) -> Self {
        Self {
            groq,
            http: Client::new(),
        }
    }
}
