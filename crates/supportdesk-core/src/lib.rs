//! Business logic for the support desk chatbot.
//!
//! Provider and secret-source traits (implemented in supportdesk-infra), the
//! support chain and chat session state machine, and the environment
//! verifier's checks. No network or filesystem access happens here.

pub mod chat;
pub mod llm;
pub mod repository;
pub mod service;
pub mod verify;
