//! Token values and their redacted secrets.

pub mod access;
pub mod secret;
