use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub ingest: Ingest,
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub backend: StorageBackend,
	pub postgres: Option<Postgres>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
	Postgres,
	Memory,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Ingest {
	pub extractor: ExtractorKind,
}

/// Which body heuristic turns a raw email into a quote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractorKind {
	/// Decode the message with a MIME parser and read the first plain-text part.
	#[default]
	Mime,
	/// Split headers from body at the first blank line without decoding anything.
	Naive,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadAuthMode {
	#[default]
	Off,
	StaticKey,
}

#[derive(Debug, Deserialize)]
pub struct Security {
	pub bind_localhost_only: bool,
	/// Inline secret for `POST /ingest-raw`. Takes precedence over `webhook_secret_env`.
	#[serde(default)]
	pub webhook_secret: Option<String>,
	#[serde(default = "default_webhook_secret_env")]
	pub webhook_secret_env: String,
	#[serde(default)]
	pub read_auth_mode: ReadAuthMode,
	#[serde(default)]
	pub read_secret: Option<String>,
	#[serde(default = "default_read_secret_env")]
	pub read_secret_env: String,
}

fn default_webhook_secret_env() -> String {
	"WEBHOOK_SECRET".to_string()
}

fn default_read_secret_env() -> String {
	"READ_SECRET".to_string()
}
