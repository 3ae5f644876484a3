// crates.io
use tracing::Span;
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, TokenRequest},
	clock::Clock,
	config::ExpiryOverride,
	credential::{CredentialFuture, TokenCredential},
	obs::{self, RequestOutcome, RequestSpan},
};

/// Number of leading secret characters that may appear in logs.
pub const TOKEN_PREVIEW_CHARS: usize = 10;

/// Credential decorator that logs each request and rewrites the expiry of issued tokens.
///
/// Errors from the wrapped credential are returned as-is: the wrapper's error type is the
/// delegate's error type. On success the returned token carries the delegate's secret and an
/// expiry of `clock.now() + override`, read after the delegate resolved. The override always
/// applies, even when the delegate's own expiry is sooner.
pub struct DebugCredential<C> {
	inner: C,
	expiry: ExpiryOverride,
	clock: Arc<dyn Clock>,
	span: Span,
}
impl<C> DebugCredential<C>
where
	C: TokenCredential,
{
	pub(crate) fn new(inner: C, expiry: ExpiryOverride, clock: Arc<dyn Clock>, span: Span) -> Self {
		Self { inner, expiry, clock, span }
	}

	/// Wrapped credential.
	pub fn inner(&self) -> &C {
		&self.inner
	}

	/// Unwraps the decorator, returning the original credential.
	pub fn into_inner(self) -> C {
		self.inner
	}

	/// Configured override.
	pub fn expiry_override(&self) -> ExpiryOverride {
		self.expiry
	}

	/// Records that a token refresh was triggered from `context`.
	pub fn log_token_refresh(&self, context: &str) {
		super::log_refresh(&self.span, context);
	}

	async fn intercept(&self, request: &TokenRequest) -> Result<AccessToken, C::Error> {
		let span = RequestSpan::new(&self.span, &request.scopes);

		obs::record_request_outcome(RequestOutcome::Attempt);

		let result = span
			.in_span(async move {
				tracing::info!(
					target: "token_debug",
					scopes = %request.scopes,
					claims = ?request.claims,
					tenant_id = ?request.tenant_id,
					"TOKEN REQUEST START"
				);

				match self.inner.get_token(request).await {
					Ok(token) => Ok(self.override_expiry(&token)),
					Err(e) => {
						tracing::error!(
							target: "token_debug",
							error = &e as &(dyn StdError + 'static),
							"TOKEN ACQUISITION FAILED"
						);

						Err(e)
					},
				}
			})
			.await;

		match &result {
			Ok(_) => obs::record_request_outcome(RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(RequestOutcome::Failure),
		}

		result
	}

	fn override_expiry(&self, token: &AccessToken) -> AccessToken {
		let override_expiry = self.expiry.expiry_from(self.clock.now());

		tracing::info!(
			target: "token_debug",
			original_expiry = %token.expires_at,
			override_expiry = %override_expiry,
			override_minutes = self.expiry.minutes(),
			"TOKEN ACQUIRED"
		);
		tracing::info!(
			target: "token_debug",
			token_preview = token.token.preview(TOKEN_PREVIEW_CHARS),
			"Token (first {TOKEN_PREVIEW_CHARS} chars)"
		);

		token.with_expiry(override_expiry)
	}
}
impl<C> TokenCredential for DebugCredential<C>
where
	C: TokenCredential,
{
	type Error = C::Error;

	fn get_token<'a>(&'a self, request: &'a TokenRequest) -> CredentialFuture<'a, Self::Error> {
		Box::pin(self.intercept(request))
	}
}
impl<C> Debug for DebugCredential<C>
where
	C: Debug,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("DebugCredential")
			.field("inner", &self.inner)
			.field("expiry", &self.expiry)
			.finish_non_exhaustive()
	}
}
