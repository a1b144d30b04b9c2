pub mod db;
pub mod memory;
pub mod models;
pub mod queries;
pub mod schema;

mod error;

pub use error::Error;

use std::{future::Future, pin::Pin};

use crate::models::{InsertOutcome, LeaderboardRow, QuoteRow};

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait QuoteStore
where
	Self: Send + Sync,
{
	/// Inserts `quote` unless a row with the same `message_id` already exists.
	///
	/// Rows without a `message_id` are always inserted.
	fn insert_quote_if_absent<'a>(
		&'a self,
		quote: &'a QuoteRow,
	) -> BoxFuture<'a, Result<InsertOutcome>>;

	/// Newest first by `created_at`.
	fn latest_quotes<'a>(&'a self, limit: usize) -> BoxFuture<'a, Result<Vec<QuoteRow>>>;

	fn random_quote<'a>(&'a self) -> BoxFuture<'a, Result<Option<QuoteRow>>>;
}

pub trait LeaderboardStore
where
	Self: Send + Sync,
{
	/// Every entry, in the store's stable iteration order.
	fn leaderboard_entries<'a>(&'a self) -> BoxFuture<'a, Result<Vec<LeaderboardRow>>>;
}
