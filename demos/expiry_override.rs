//! Wraps a simulated SDK credential that issues hour-long tokens and shows the shortened expiry
//! reported by the debug wrapper.
//!
//! Run with `TOKEN_DEBUG_ENABLED=true TOKEN_DEBUG_EXPIRY_MINUTES=2`; without the flag the base
//! credential is used directly.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use time::{Duration, OffsetDateTime};
use tracing_subscriber::EnvFilter;
// self
use token_debug::{
	auth::{AccessToken, ScopeSet, TokenRequest},
	config::DebugConfig,
	credential::{PassthroughCredential, TokenCredential},
	error::CredentialError,
	obs::LOG_TARGET,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new(format!("warn,{LOG_TARGET}=info"))),
		)
		.init();

	let base = PassthroughCredential::new(|request: TokenRequest| async move {
		if request.scopes.is_empty() {
			return Err(CredentialError::authentication("no scopes requested"));
		}

		Ok(AccessToken::new(
			"eyJ0eXAiOiJKV1QiLCJhbGciOiJSUzI1NiJ9.demo",
			OffsetDateTime::now_utc() + Duration::minutes(60),
		))
	});
	let credential: Arc<dyn TokenCredential<Error = CredentialError>> =
		match DebugConfig::from_env()?.interceptor()? {
			Some(interceptor) => Arc::new(interceptor.wrap(base)),
			None => Arc::new(base),
		};
	let request = TokenRequest::new(ScopeSet::new(["https://database.windows.net/.default"])?);
	let token = credential.get_token(&request).await?;

	println!("Token expires at {}.", token.expires_at);

	match credential.get_token(&TokenRequest::default()).await {
		Ok(_) => println!("Unexpected token for an empty scope set."),
		Err(e) => println!("Delegate error passed through: {e}."),
	}

	Ok(())
}
