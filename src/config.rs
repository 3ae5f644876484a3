//! Opt-in switch and override duration for the debug interceptor.

// self
use crate::{_prelude::*, debug::DebugInterceptor, error::ConfigError};

/// Validated override duration applied to every intercepted token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExpiryOverride {
	minutes: i64,
}
impl ExpiryOverride {
	/// Override used when nothing is configured.
	pub const DEFAULT_MINUTES: i64 = 2;

	/// Validates a minute count; any positive value is accepted.
	pub fn from_minutes(minutes: i64) -> Result<Self, ConfigError> {
		if minutes <= 0 {
			return Err(ConfigError::NonPositiveExpiry { minutes });
		}

		Ok(Self { minutes })
	}

	/// Configured minute count.
	pub const fn minutes(self) -> i64 {
		self.minutes
	}

	/// Override as a [`Duration`], saturating for minute counts beyond its range.
	pub const fn duration(self) -> Duration {
		Duration::seconds(self.minutes.saturating_mul(60))
	}

	/// Expiry to report for a token handled at `now`, saturating at the largest instant.
	pub fn expiry_from(self, now: OffsetDateTime) -> OffsetDateTime {
		now.saturating_add(self.duration())
	}
}
impl Default for ExpiryOverride {
	fn default() -> Self {
		Self { minutes: Self::DEFAULT_MINUTES }
	}
}
impl TryFrom<i64> for ExpiryOverride {
	type Error = ConfigError;

	fn try_from(minutes: i64) -> Result<Self, Self::Error> {
		Self::from_minutes(minutes)
	}
}
impl Display for ExpiryOverride {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{} minutes", self.minutes)
	}
}

/// Settings that decide whether token debugging is active.
///
/// Keys use kebab-case so the same document works for JSON files and the environment
/// (`TOKEN_DEBUG_ENABLED`, `TOKEN_DEBUG_EXPIRY_MINUTES`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct DebugConfig {
	/// Explicit opt-in; nothing is intercepted unless this is `true`.
	pub enabled: bool,
	/// Override duration in minutes.
	pub expiry_minutes: i64,
}
impl DebugConfig {
	/// Environment variable holding the opt-in flag.
	pub const ENV_ENABLED: &'static str = "TOKEN_DEBUG_ENABLED";
	/// Environment variable holding the override duration in minutes.
	pub const ENV_EXPIRY_MINUTES: &'static str = "TOKEN_DEBUG_EXPIRY_MINUTES";

	/// Enabled configuration with the given override.
	pub fn enabled(expiry_minutes: i64) -> Self {
		Self { enabled: true, expiry_minutes }
	}

	/// Parses a JSON document, reporting the failing field path on error.
	pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
		let de = &mut serde_json::Deserializer::from_str(raw);

		Ok(serde_path_to_error::deserialize(de)?)
	}

	/// Reads the configuration from process environment variables.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Reads the configuration through an arbitrary key lookup.
	///
	/// Missing keys keep their defaults; present keys must parse.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut config = Self::default();

		if let Some(raw) = lookup(Self::ENV_ENABLED) {
			config.enabled = parse_flag(&raw)
				.ok_or(ConfigError::InvalidValue { key: Self::ENV_ENABLED, value: raw })?;
		}
		if let Some(raw) = lookup(Self::ENV_EXPIRY_MINUTES) {
			let Ok(minutes) = raw.trim().parse() else {
				return Err(ConfigError::InvalidValue { key: Self::ENV_EXPIRY_MINUTES, value: raw });
			};

			config.expiry_minutes = minutes;
		}

		Ok(config)
	}

	/// Validated override for this configuration.
	pub fn expiry_override(&self) -> Result<ExpiryOverride, ConfigError> {
		ExpiryOverride::from_minutes(self.expiry_minutes)
	}

	/// Builds the interceptor when debugging is enabled.
	///
	/// Returns `Ok(None)` for a disabled configuration without validating the duration, so a
	/// stale value cannot break production start-up. When enabled, construction emits the
	/// activation banner.
	pub fn interceptor(&self) -> Result<Option<DebugInterceptor>> {
		if !self.enabled {
			return Ok(None);
		}

		Ok(Some(DebugInterceptor::new(self.expiry_minutes)?))
	}
}
impl Default for DebugConfig {
	fn default() -> Self {
		Self { enabled: false, expiry_minutes: ExpiryOverride::DEFAULT_MINUTES }
	}
}

fn parse_flag(raw: &str) -> Option<bool> {
	match raw.trim().to_ascii_lowercase().as_str() {
		"true" | "1" => Some(true),
		"false" | "0" => Some(false),
		_ => None,
	}
}
