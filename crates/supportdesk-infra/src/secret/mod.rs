//! Credential providers.
//!
//! - `env`: process environment (read-only, highest priority)
//! - `dotenv`: local `.env` file, parsed without mutating the environment
//! - `chain`: wires both into a `SecretService`

pub mod chain;
pub mod dotenv;
pub mod env;
