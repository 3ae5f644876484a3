//! Observability helpers for intercepted token requests.
//!
//! # Feature Flags
//!
//! - Spans named `token_debug.get_token` always wrap intercepted requests and carry the
//!   `scope_fingerprint` field.
//! - Enable `metrics` to increment the `token_debug_get_token_total` counter for every
//!   attempt/success/failure, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Target used for every event emitted by this crate.
pub const LOG_TARGET: &str = "token_debug";

/// Outcome labels recorded for each intercepted request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to the wrapper.
	Attempt,
	/// Delegate succeeded and the expiry was overridden.
	Success,
	/// Delegate failure propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
