//! Auth-domain values: scope sets, token requests, and tokens.

pub mod request;
pub mod scope;
pub mod token;

pub use request::*;
pub use scope::*;
pub use token::{access::*, secret::*};
