//! Token request context passed through to credentials.

// self
use crate::{_prelude::*, auth::ScopeSet};

/// Scopes and optional claims a caller wants a token for.
///
/// The wrapper forwards the same value to its delegate and never alters it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRequest {
	/// Requested scopes.
	pub scopes: ScopeSet,
	/// Opaque claims challenge, forwarded as-is.
	pub claims: Option<String>,
	/// Tenant hint for multi-tenant credentials.
	pub tenant_id: Option<String>,
}
impl TokenRequest {
	/// Creates a request for the provided scopes.
	pub fn new(scopes: ScopeSet) -> Self {
		Self { scopes, claims: None, tenant_id: None }
	}

	/// Attaches a claims challenge.
	pub fn with_claims(mut self, claims: impl Into<String>) -> Self {
		self.claims = Some(claims.into());

		self
	}

	/// Attaches a tenant hint.
	pub fn with_tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
		self.tenant_id = Some(tenant_id.into());

		self
	}
}
impl From<ScopeSet> for TokenRequest {
	fn from(scopes: ScopeSet) -> Self {
		Self::new(scopes)
	}
}
