// crates.io
use tracing::{Instrument, Span, instrument::Instrumented};
// self
use crate::{_prelude::*, auth::ScopeSet};

/// Span wrapping a single intercepted token request.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	span: Span,
}
impl RequestSpan {
	/// Creates a `token_debug.get_token` span under `parent`.
	///
	/// A disabled `parent` leaves the caller's current span as the parent, so requests still nest
	/// under application spans when the interceptor was built before a subscriber existed.
	pub fn new(parent: &Span, scopes: &ScopeSet) -> Self {
		let scope_fingerprint = scopes.fingerprint();
		let span = parent.in_scope(|| {
			tracing::info_span!(target: "token_debug", "token_debug.get_token", scope_fingerprint)
		});

		Self { span }
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn in_span<Fut>(&self, fut: Fut) -> Instrumented<Fut>
	where
		Fut: Future,
	{
		fut.instrument(self.span.clone())
	}

	/// Underlying span handle.
	pub fn span(&self) -> &Span {
		&self.span
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn in_span_wraps_future() {
		let scopes = ScopeSet::new(["email"]).expect("Scope fixture should be valid.");
		let span = RequestSpan::new(&Span::none(), &scopes);
		let value = span.in_span(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
