pub mod access;
pub mod ingest;
pub mod leaderboard;
pub mod limit;
pub mod quotes;

mod error;

pub use error::{Error, Result};
pub use ingest::{IngestRawRequest, IngestRawResponse};
pub use leaderboard::{LeaderboardEntry, TopRequest};
pub use quotes::{
	AddQuoteRequest, AddQuoteResponse, LatestRequest, LatestResponse, Quote, RandomRequest,
	RandomResponse,
};

use std::sync::Arc;

use quotebox_config::{Config, StorageBackend};
use quotebox_storage::{LeaderboardStore, QuoteStore, db::Db, memory::MemoryStore};

pub struct QuoteService {
	pub cfg: Config,
	pub quotes: Arc<dyn QuoteStore>,
	pub leaderboard: Arc<dyn LeaderboardStore>,
}
impl QuoteService {
	pub fn new(
		cfg: Config,
		quotes: Arc<dyn QuoteStore>,
		leaderboard: Arc<dyn LeaderboardStore>,
	) -> Self {
		Self { cfg, quotes, leaderboard }
	}

	/// Builds the service on the backend named by `storage.backend`.
	pub async fn connect(cfg: Config) -> Result<Self> {
		match cfg.storage.backend {
			StorageBackend::Postgres => {
				let Some(postgres) = cfg.storage.postgres.as_ref() else {
					return Err(Error::ServerMisconfigured {
						message: "storage.postgres is required for the postgres backend."
							.to_string(),
					});
				};
				let db = Arc::new(Db::connect(postgres).await?);

				db.ensure_schema().await?;

				tracing::info!("Postgres store ready.");

				Ok(Self::new(cfg, db.clone(), db))
			},
			StorageBackend::Memory => {
				let store = Arc::new(MemoryStore::new());

				tracing::info!("In-memory store ready; data will not survive a restart.");

				Ok(Self::new(cfg, store.clone(), store))
			},
		}
	}
}

pub(crate) fn now_millis() -> i64 {
	let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos();

	i64::try_from(nanos / 1_000_000).unwrap_or(i64::MAX)
}
