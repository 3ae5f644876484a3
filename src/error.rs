//! Crate-level error types for configuration plus a ready-made credential error.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by the crate's own APIs.
///
/// Token requests never produce this type: a wrapped credential reports the delegate's error
/// type verbatim.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem (the invalid-configuration kind).
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Configuration and validation failures raised before any token traffic.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Override duration is zero or negative.
	#[error("Token expiry override must be positive, got {minutes} minutes.")]
	NonPositiveExpiry {
		/// Rejected minute count.
		minutes: i64,
	},
	/// A configuration value could not be interpreted.
	#[error("Configuration key `{key}` has an invalid value `{value}`.")]
	InvalidValue {
		/// Configuration key.
		key: &'static str,
		/// Raw value that failed to parse.
		value: String,
	},
	/// Structured configuration could not be deserialized.
	#[error("Configuration is malformed at `{path}`.")]
	Parse {
		/// Path to the offending field.
		path: String,
		/// Underlying JSON failure.
		#[source]
		source: serde_json::Error,
	},
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self::Parse { path, source: e.into_inner() }
	}
}

/// General purpose failure for credential adapters that have no error type of their own.
#[derive(Debug, ThisError)]
pub enum CredentialError {
	/// The identity provider rejected the credential.
	#[error("Authentication failed: {reason}.")]
	Authentication {
		/// Provider-supplied reason string.
		reason: String,
	},
	/// Network or IO failure while acquiring the token.
	#[error("Transport error occurred while acquiring a token.")]
	Transport {
		/// Transport-specific failure.
		#[source]
		source: BoxError,
	},
	/// The acquisition was cancelled before it completed.
	#[error("Token acquisition was cancelled.")]
	Cancelled,
}
impl CredentialError {
	/// Builds an [`CredentialError::Authentication`] from any reason string.
	pub fn authentication(reason: impl Into<String>) -> Self {
		Self::Authentication { reason: reason.into() }
	}

	/// Wraps a transport-specific error.
	pub fn transport(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Transport { source: Box::new(src) }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn config_error_converts_into_crate_error() {
		let err: Error = ConfigError::NonPositiveExpiry { minutes: 0 }.into();

		assert!(matches!(err, Error::Config(ConfigError::NonPositiveExpiry { minutes: 0 })));
		assert_eq!(err.to_string(), "Token expiry override must be positive, got 0 minutes.");
	}

	#[test]
	fn path_errors_keep_the_field_location() {
		let de = &mut serde_json::Deserializer::from_str("{\"inner\":{\"value\":\"x\"}}");
		let raw = serde_path_to_error::deserialize::<_, NestedConfig>(de)
			.expect_err("A string must not deserialize into an integer.");
		let err = ConfigError::from(raw);

		assert!(matches!(&err, ConfigError::Parse { path, .. } if path == "inner.value"));
		assert!(StdError::source(&err).is_some());
	}

	#[test]
	fn transport_errors_expose_their_source() {
		let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
		let err = CredentialError::transport(io);
		let source = StdError::source(&err).expect("Transport errors should carry a source.");

		assert_eq!(source.to_string(), "reset by peer");
	}

	#[derive(Debug, Deserialize)]
	struct NestedConfig {
		#[allow(dead_code)]
		inner: NestedValue,
	}

	#[derive(Debug, Deserialize)]
	struct NestedValue {
		#[allow(dead_code)]
		value: i64,
	}
}
