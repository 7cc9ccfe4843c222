//! Fixed prompt, model, and session constants for the emergency relay.

/// System prompt sent with every relay call.
pub const SYSTEM_PROMPT: &str = "You are LifeSaver AI, a calm and expert emergency responder. \
When the user describes a situation, give short, clear, step-by-step instructions. \
Be compassionate, precise, and safety-focused. Keep responses concise and actionable.";

/// Model used for every relay call.
pub const MODEL: &str = "gpt-4o-mini";

/// Session identifier sent with every request. Every relay on a running
/// instance shares this one upstream conversation context; there is no
/// per-user isolation.
pub const SESSION_ID: &str = "lifesaver-emergency";
