//! Shared-secret checks for the ingest webhook and the protected read endpoints.
//!
//! Secrets are compared with plain string equality.

pub const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthError {
	/// No secret is configured on the server, so no credential can be accepted.
	Misconfigured,
	/// A secret is configured and the request did not present it.
	Denied,
}

pub fn authorize(provided: Option<&str>, expected: Option<&str>) -> Result<(), AuthError> {
	let Some(expected) = expected.filter(|secret| !secret.is_empty()) else {
		return Err(AuthError::Misconfigured);
	};

	match provided {
		Some(provided) if provided == expected => Ok(()),
		_ => Err(AuthError::Denied),
	}
}

/// Checks an `Authorization` header value of the exact form `Bearer <secret>`.
pub fn authorize_bearer(authorization: Option<&str>, secret: Option<&str>) -> Result<(), AuthError> {
	let token = authorization.and_then(|value| value.strip_prefix(BEARER_PREFIX));

	authorize(token, secret)
}
