//! Debug interceptor that wraps credentials and overrides token expiry.
//!
//! Building a [`DebugInterceptor`] is an explicit opt-in: construction validates the override
//! and logs a warning banner once. Every credential passed through [`DebugInterceptor::wrap`]
//! shares the interceptor's override, clock, and parent span.

mod credential;

pub use credential::{DebugCredential, TOKEN_PREVIEW_CHARS};

// crates.io
use tracing::Span;
// self
use crate::{
	_prelude::*,
	clock::{Clock, SystemClock},
	config::ExpiryOverride,
	credential::TokenCredential,
};

const BANNER_RULE: &str = "========================================";

/// Factory for [`DebugCredential`] wrappers bound to one override duration.
#[derive(Clone)]
pub struct DebugInterceptor {
	expiry: ExpiryOverride,
	clock: Arc<dyn Clock>,
	span: Span,
}
impl DebugInterceptor {
	/// Validates `expiry_minutes` and announces debug mode.
	///
	/// Non-positive values fail with
	/// [`ConfigError::NonPositiveExpiry`](crate::error::ConfigError::NonPositiveExpiry) before
	/// any banner is logged.
	pub fn new(expiry_minutes: i64) -> Result<Self> {
		Ok(Self::from_override(ExpiryOverride::from_minutes(expiry_minutes)?))
	}

	/// Builds the interceptor from an already validated override and announces debug mode.
	pub fn from_override(expiry: ExpiryOverride) -> Self {
		announce(expiry);

		let span = tracing::info_span!(
			target: "token_debug",
			"token_debug.interceptor",
			expiry_minutes = expiry.minutes()
		);

		Self { expiry, clock: Arc::new(SystemClock), span }
	}

	/// Replaces the clock used to compute override expiries.
	pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
		self.clock = clock;

		self
	}

	/// Replaces the parent span that every request span is created under.
	pub fn with_span(mut self, span: Span) -> Self {
		self.span = span;

		self
	}

	/// Configured override.
	pub fn expiry_override(&self) -> ExpiryOverride {
		self.expiry
	}

	/// Wraps `credential` so its tokens report `now + override` as their expiry.
	pub fn wrap<C>(&self, credential: C) -> DebugCredential<C>
	where
		C: TokenCredential,
	{
		DebugCredential::new(credential, self.expiry, self.clock.clone(), self.span.clone())
	}

	/// Records that a token refresh was triggered from `context`.
	pub fn log_token_refresh(&self, context: &str) {
		log_refresh(&self.span, context);
	}
}
impl Debug for DebugInterceptor {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("DebugInterceptor").field("expiry", &self.expiry).finish_non_exhaustive()
	}
}

fn announce(expiry: ExpiryOverride) {
	tracing::warn!(target: "token_debug", "{BANNER_RULE}");
	tracing::warn!(target: "token_debug", "TOKEN DEBUG MODE ENABLED");
	tracing::warn!(
		target: "token_debug",
		expiry_minutes = expiry.minutes(),
		"Token expiry override: {} minutes",
		expiry.minutes()
	);
	tracing::warn!(target: "token_debug", "DO NOT USE IN PRODUCTION!");
	tracing::warn!(target: "token_debug", "{BANNER_RULE}");
}

fn log_refresh(span: &Span, context: &str) {
	span.in_scope(|| tracing::info!(target: "token_debug", context, "TOKEN REFRESH triggered"));
}
