//! Shared domain types for the support desk chatbot.
//!
//! Messages and completion requests, conversation history entries, startup
//! configuration, credentials, readiness check results, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod check;
pub mod config;
pub mod error;
pub mod llm;
pub mod secret;
