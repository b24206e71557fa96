//! Interactive chat front-end for `support-chat`.

pub mod banner;
pub mod input;
pub mod loop_runner;
pub mod renderer;
