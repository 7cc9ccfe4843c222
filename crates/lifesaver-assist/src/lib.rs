//! Chat relay for the LifeSaver API.
//!
//! Forwards a single user message to an external conversational AI
//! provider with a fixed system prompt and model, and relays the reply
//! text. No conversation history is kept on this side.

mod chat;
mod prompts;

pub use chat::{ChatClient, ChatError, ChatResult};
pub use prompts::{MODEL, SESSION_ID, SYSTEM_PROMPT};
