use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One prior turn of the widget conversation. The history lives client-side
/// and is round-tripped with every request; nothing is persisted server-side.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

/// Raw request body for POST /api/chat. Fields are optional so the handler
/// can answer missing ones with a descriptive 400 instead of the extractor's
/// generic error.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub language: Option<String>, // "en" | "ar"
    #[serde(rename = "conversationHistory", default)]
    pub conversation_history: Vec<ChatTurn>,
}

/// Resolver output. `success` is true only when the remote completion
/// produced the text; `error` is a server-side diagnostic and is never
/// returned to the client.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    pub response: String,
    pub success: bool,
    pub error: Option<String>,
}
