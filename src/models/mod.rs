mod chat;

pub use chat::{ChatOutcome, ChatRequest, ChatTurn, Role};
