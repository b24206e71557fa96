//! Application services built on the port traits.

pub mod secret;
