use std::{io, path::PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read quotebox config at {}.", path.display())]
	ReadConfig { path: PathBuf, source: io::Error },
	#[error("Failed to parse quotebox config at {}: {source}", path.display())]
	ParseConfig { path: PathBuf, source: toml::de::Error },
	/// A value parsed but breaks a rule checked by [`crate::validate`].
	#[error("{message}")]
	Validation { message: String },
}
