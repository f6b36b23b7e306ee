pub mod chat;
pub mod fallback;
