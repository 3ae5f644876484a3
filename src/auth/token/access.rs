//! Immutable access token value returned by credentials.

// self
use crate::{_prelude::*, auth::token::secret::TokenSecret};

/// Secret token plus the absolute instant it stops being valid.
///
/// Values are never mutated in place; [`with_expiry`](Self::with_expiry) returns a copy so a token
/// shared with other consumers keeps its original expiry.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
	/// Token secret; callers must avoid logging it.
	pub token: TokenSecret,
	/// Expiry instant reported by whoever issued this value.
	#[serde(with = "time::serde::rfc3339")]
	pub expires_at: OffsetDateTime,
}
impl AccessToken {
	/// Creates a token from a raw secret and absolute expiry.
	pub fn new(token: impl Into<String>, expires_at: OffsetDateTime) -> Self {
		Self { token: TokenSecret::new(token), expires_at }
	}

	/// Returns a copy carrying the same secret and a different expiry.
	pub fn with_expiry(&self, expires_at: OffsetDateTime) -> Self {
		Self { token: self.token.clone(), expires_at }
	}

	/// Returns `true` once `instant` has reached the expiry.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		instant >= self.expires_at
	}

	/// Remaining lifetime relative to `instant`, clamped at zero.
	pub fn expires_in(&self, instant: OffsetDateTime) -> Duration {
		let remaining = self.expires_at - instant;

		if remaining.is_negative() { Duration::ZERO } else { remaining }
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AccessToken")
			.field("token", &"<redacted>")
			.field("expires_at", &self.expires_at)
			.finish()
	}
}
