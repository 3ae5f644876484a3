//! Secret token wrapper that redacts sensitive material.

// self
use crate::_prelude::*;

/// Redacted token secret keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns at most the first `max_chars` characters of the secret.
	///
	/// Counts characters rather than bytes so the prefix never splits a code point. Secrets
	/// shorter than `max_chars` are returned whole.
	pub fn preview(&self, max_chars: usize) -> &str {
		match self.0.char_indices().nth(max_chars) {
			Some((end, _)) => &self.0[..end],
			None => &self.0,
		}
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let secret = TokenSecret::new("super-secret");

		assert_eq!(format!("{secret:?}"), "TokenSecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
	}

	#[test]
	fn preview_is_bounded_by_the_requested_length() {
		let secret = TokenSecret::new("abcdefghijklmnop");

		assert_eq!(secret.preview(10), "abcdefghij");
		assert_eq!(secret.preview(0), "");
		assert_eq!(TokenSecret::new("short").preview(10), "short");
		assert_eq!(TokenSecret::new("exactly-10").preview(10), "exactly-10");
	}

	#[test]
	fn preview_counts_characters_not_bytes() {
		let secret = TokenSecret::new("ééééééééééxyz");

		assert_eq!(secret.preview(10), "éééééééééé");
		assert_eq!(secret.preview(10).chars().count(), 10);
	}
}
