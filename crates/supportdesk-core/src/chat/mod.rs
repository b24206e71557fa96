//! Customer support conversation: prompt template, history, the model
//! chain, and the session state machine that drives it.

pub mod chain;
pub mod history;
pub mod prompt;
pub mod session;
