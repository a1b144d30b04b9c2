pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Server misconfigured: {message}")]
	ServerMisconfigured { message: String },
	#[error("Unauthorized: {message}")]
	Unauthorized { message: String },
	#[error("No quote found in the email body.")]
	NoQuoteFound,
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}

impl From<quotebox_storage::Error> for Error {
	fn from(err: quotebox_storage::Error) -> Self {
		match err {
			quotebox_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
			other => Self::Storage { message: other.to_string() },
		}
	}
}
