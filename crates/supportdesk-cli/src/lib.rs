//! Terminal front-ends for the support desk: the interactive chat loop
//! (`support-chat`) and the environment verifier (`support-verify`).

pub mod cli;
pub mod state;
