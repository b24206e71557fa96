//! Port traits implemented by the infrastructure layer (supportdesk-infra).

pub mod secret;
