//! Infrastructure layer for the support desk chatbot.
//!
//! Implements the ports defined in supportdesk-core: the async-openai chat
//! provider, environment and `.env` credential providers, the TOML config
//! loader, and the runtime probes used by the environment verifier.

pub mod config;
pub mod llm;
pub mod probe;
pub mod secret;
