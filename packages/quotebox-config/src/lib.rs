mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, ExtractorKind, Ingest, Postgres, ReadAuthMode, Security, Service, Storage,
	StorageBackend,
};

use std::{env, fs, net::SocketAddr, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	resolve_secrets(&mut cfg, |name| env::var(name).ok());

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

/// Fills secrets that were not set inline from the variables named in `[security]`.
///
/// A blank inline value counts as not set.
pub fn resolve_secrets<F>(cfg: &mut Config, lookup: F)
where
	F: Fn(&str) -> Option<String>,
{
	if is_blank(cfg.security.webhook_secret.as_deref()) {
		cfg.security.webhook_secret = lookup(cfg.security.webhook_secret_env.as_str());
	}
	if is_blank(cfg.security.read_secret.as_deref()) {
		cfg.security.read_secret = lookup(cfg.security.read_secret_env.as_str());
	}
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}

	let http_addr: SocketAddr = cfg.service.http_bind.parse().map_err(|_| Error::Validation {
		message: "service.http_bind must be a socket address such as 127.0.0.1:8080.".to_string(),
	})?;

	if cfg.security.bind_localhost_only && !http_addr.ip().is_loopback() {
		return Err(Error::Validation {
			message: "service.http_bind must be a loopback address when security.bind_localhost_only is true."
				.to_string(),
		});
	}

	match cfg.storage.backend {
		StorageBackend::Postgres => {
			let Some(postgres) = cfg.storage.postgres.as_ref() else {
				return Err(Error::Validation {
					message: "storage.postgres is required when storage.backend is postgres."
						.to_string(),
				});
			};

			if postgres.dsn.trim().is_empty() {
				return Err(Error::Validation {
					message: "storage.postgres.dsn must be non-empty.".to_string(),
				});
			}
			if postgres.pool_max_conns == 0 {
				return Err(Error::Validation {
					message: "storage.postgres.pool_max_conns must be greater than zero."
						.to_string(),
				});
			}
		},
		StorageBackend::Memory => {},
	}

	for (label, value) in [
		("security.webhook_secret_env", &cfg.security.webhook_secret_env),
		("security.read_secret_env", &cfg.security.read_secret_env),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if is_blank(cfg.security.webhook_secret.as_deref()) {
		cfg.security.webhook_secret = None;
	}
	if is_blank(cfg.security.read_secret.as_deref()) {
		cfg.security.read_secret = None;
	}
}

fn is_blank(secret: Option<&str>) -> bool {
	secret.is_none_or(|secret| secret.trim().is_empty())
}
