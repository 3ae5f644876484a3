//! Drives a token refresh loop against a simulated clock so the refresh path runs several times
//! within one process, as it would in a test that cannot wait an hour for real expiry.

// std
use std::sync::{
	Arc,
	atomic::{AtomicI64, Ordering},
};
// crates.io
use color_eyre::Result;
use time::{Duration, OffsetDateTime, macros};
// self
use token_debug::{
	auth::{AccessToken, ScopeSet, TokenRequest},
	clock::Clock,
	credential::{PassthroughCredential, TokenCredential},
	debug::DebugInterceptor,
	error::CredentialError,
};

const START: OffsetDateTime = macros::datetime!(2025-01-01 00:00 UTC);

/// Clock the loop advances by hand.
#[derive(Debug, Default)]
struct SteppedClock {
	elapsed_secs: AtomicI64,
}
impl SteppedClock {
	fn advance(&self, by: Duration) {
		self.elapsed_secs.fetch_add(by.whole_seconds(), Ordering::SeqCst);
	}
}
impl Clock for SteppedClock {
	fn now(&self) -> OffsetDateTime {
		START + Duration::seconds(self.elapsed_secs.load(Ordering::SeqCst))
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt().init();

	let clock = Arc::new(SteppedClock::default());
	let issued = Arc::new(AtomicI64::new(0));
	let counter = issued.clone();
	let credential = DebugInterceptor::new(1)?.with_clock(clock.clone()).wrap(
		PassthroughCredential::new(move |_: TokenRequest| {
			let serial = counter.fetch_add(1, Ordering::SeqCst);

			async move {
				Ok::<_, CredentialError>(AccessToken::new(
					format!("token-{serial:04}-real-lifetime-one-hour"),
					START + Duration::hours(1),
				))
			}
		}),
	);
	let request = TokenRequest::new(ScopeSet::new(["https://storage.azure.com/.default"])?);
	let mut current = credential.get_token(&request).await?;

	for _ in 0..10 {
		clock.advance(Duration::seconds(15));

		if current.is_expired_at(clock.now()) {
			credential.log_token_refresh("refresh_loop::main");
			current = credential.get_token(&request).await?;
		}
	}

	println!("Issued {} tokens in 150 simulated seconds.", issued.load(Ordering::SeqCst));

	Ok(())
}
