//! Adapter turning an async closure into a [`TokenCredential`].

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, TokenRequest},
	credential::{CredentialFuture, TokenCredential},
};

/// Credential that forwards every request to a caller-supplied async function.
///
/// This is the seam for plugging an SDK credential (client secret, managed identity,
/// certificate, ...) into the crate: the closure owns the real acquisition logic and this type
/// only adapts its signature.
#[derive(Clone)]
pub struct PassthroughCredential<F> {
	acquire: F,
}
impl<F> PassthroughCredential<F> {
	/// Wraps the provided acquisition function.
	pub fn new(acquire: F) -> Self {
		Self { acquire }
	}
}
impl<F, Fut, E> TokenCredential for PassthroughCredential<F>
where
	F: Send + Sync + Fn(TokenRequest) -> Fut,
	Fut: 'static + Send + Future<Output = Result<AccessToken, E>>,
	E: 'static + Send + Sync + StdError,
{
	type Error = E;

	fn get_token<'a>(&'a self, request: &'a TokenRequest) -> CredentialFuture<'a, Self::Error> {
		Box::pin((self.acquire)(request.clone()))
	}
}
impl<F> Debug for PassthroughCredential<F> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("PassthroughCredential(..)")
	}
}
