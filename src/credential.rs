//! Credential capability shared by token sources and the decorators that wrap them.

pub mod passthrough;

pub use passthrough::PassthroughCredential;

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, TokenRequest},
};

/// Boxed future returned by [`TokenCredential::get_token`].
pub type CredentialFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<AccessToken, E>> + 'a + Send>>;

/// Anything that can asynchronously produce an [`AccessToken`] for a [`TokenRequest`].
///
/// Both real token sources and [`DebugCredential`](crate::debug::DebugCredential) implement this
/// trait, so wrappers can be substituted or nested wherever a credential is expected. The error
/// type is an associated type so decorators can report their delegate's failures without
/// converting them.
pub trait TokenCredential
where
	Self: Send + Sync,
{
	/// Failure reported by this credential.
	type Error: 'static + Send + Sync + StdError;

	/// Acquires a token for the request.
	fn get_token<'a>(&'a self, request: &'a TokenRequest) -> CredentialFuture<'a, Self::Error>;
}
impl<T> TokenCredential for Arc<T>
where
	T: ?Sized + TokenCredential,
{
	type Error = T::Error;

	fn get_token<'a>(&'a self, request: &'a TokenRequest) -> CredentialFuture<'a, Self::Error> {
		(**self).get_token(request)
	}
}
impl<T> TokenCredential for Box<T>
where
	T: ?Sized + TokenCredential,
{
	type Error = T::Error;

	fn get_token<'a>(&'a self, request: &'a TokenRequest) -> CredentialFuture<'a, Self::Error> {
		(**self).get_token(request)
	}
}
