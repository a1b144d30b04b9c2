use quotebox_config::ReadAuthMode;
use quotebox_domain::auth::{self, AuthError};

use crate::{Error, QuoteService, Result};

pub const READ_KEY_HEADER: &str = "x-quotebox-read-key";

impl QuoteService {
	pub(crate) fn authorize_webhook(&self, authorization: Option<&str>) -> Result<()> {
		auth::authorize_bearer(authorization, self.cfg.security.webhook_secret.as_deref())
			.map_err(|err| auth_failure(err, self.cfg.security.webhook_secret_env.as_str()))
	}

	/// Reads are open unless `security.read_auth_mode` is `static_key`.
	pub(crate) fn authorize_read(&self, read_key: Option<&str>) -> Result<()> {
		match self.cfg.security.read_auth_mode {
			ReadAuthMode::Off => Ok(()),
			ReadAuthMode::StaticKey =>
				auth::authorize(read_key, self.cfg.security.read_secret.as_deref())
					.map_err(|err| auth_failure(err, self.cfg.security.read_secret_env.as_str())),
		}
	}
}

fn auth_failure(err: AuthError, secret_env: &str) -> Error {
	match err {
		AuthError::Misconfigured => {
			tracing::warn!(secret_env, "Rejecting request because the secret is not configured.");

			Error::ServerMisconfigured { message: format!("Missing {secret_env}.") }
		},
		AuthError::Denied => {
			tracing::warn!(secret_env, "Rejecting request with a wrong or missing credential.");

			Error::Unauthorized { message: "Credential does not match.".to_string() }
		},
	}
}
