//! Credential decorator that observes token acquisition and shortens the reported expiry so
//! refresh code paths can be exercised in seconds instead of hours.
//!
//! Wrap any [`TokenCredential`](credential::TokenCredential) with a
//! [`DebugInterceptor`](debug::DebugInterceptor); the resulting
//! [`DebugCredential`](debug::DebugCredential) logs every request, passes delegate errors through
//! untouched, and rewrites the expiry of successful tokens to `now + override`.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod clock;
pub mod config;
pub mod credential;
pub mod debug;
pub mod error;
pub mod obs;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};

	pub use crate::error::Result;
}

pub use time;
#[cfg(test)] use {color_eyre as _, parking_lot as _, tracing_subscriber as _};
