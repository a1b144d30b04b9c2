//! Process-local store backing `storage.backend = "memory"` and the service tests.

use std::sync::{Mutex, MutexGuard};

use rand::Rng;
use serde_json::Value;
use uuid::Uuid;

use crate::{
	BoxFuture, LeaderboardStore, QuoteStore, Result,
	models::{InsertOutcome, LeaderboardRow, QuoteRow},
};

#[derive(Default)]
pub struct MemoryStore {
	state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
	quotes: Vec<QuoteRow>,
	leaderboard: Vec<LeaderboardRow>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a leaderboard document and returns its id.
	pub fn push_leaderboard_entry(&self, doc: Value) -> Uuid {
		let entry_id = Uuid::new_v4();

		self.lock().leaderboard.push(LeaderboardRow { entry_id, doc });

		entry_id
	}

	pub fn quote_count(&self) -> usize {
		self.lock().quotes.len()
	}

	pub fn quotes(&self) -> Vec<QuoteRow> {
		self.lock().quotes.clone()
	}

	fn lock(&self) -> MutexGuard<'_, MemoryState> {
		self.state.lock().unwrap_or_else(|err| err.into_inner())
	}

	fn insert_sync(&self, quote: &QuoteRow) -> InsertOutcome {
		let mut state = self.lock();

		if let Some(message_id) = quote.message_id.as_deref()
			&& let Some(existing) =
				state.quotes.iter().find(|row| row.message_id.as_deref() == Some(message_id))
		{
			return InsertOutcome::Existing(existing.quote_id);
		}

		state.quotes.push(quote.clone());

		InsertOutcome::Inserted(quote.quote_id)
	}

	fn latest_sync(&self, limit: usize) -> Vec<QuoteRow> {
		let state = self.lock();
		// Reverse first so equal timestamps list the most recent insert first.
		let mut rows = state.quotes.iter().rev().cloned().collect::<Vec<_>>();

		rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
		rows.truncate(limit);

		rows
	}

	fn random_sync(&self) -> Option<QuoteRow> {
		let state = self.lock();

		if state.quotes.is_empty() {
			return None;
		}

		let index = rand::rng().random_range(0..state.quotes.len());

		state.quotes.get(index).cloned()
	}
}

impl QuoteStore for MemoryStore {
	fn insert_quote_if_absent<'a>(
		&'a self,
		quote: &'a QuoteRow,
	) -> BoxFuture<'a, Result<InsertOutcome>> {
		let outcome = self.insert_sync(quote);

		Box::pin(async move { Ok(outcome) })
	}

	fn latest_quotes<'a>(&'a self, limit: usize) -> BoxFuture<'a, Result<Vec<QuoteRow>>> {
		let rows = self.latest_sync(limit);

		Box::pin(async move { Ok(rows) })
	}

	fn random_quote<'a>(&'a self) -> BoxFuture<'a, Result<Option<QuoteRow>>> {
		let row = self.random_sync();

		Box::pin(async move { Ok(row) })
	}
}

impl LeaderboardStore for MemoryStore {
	fn leaderboard_entries<'a>(&'a self) -> BoxFuture<'a, Result<Vec<LeaderboardRow>>> {
		let rows = self.lock().leaderboard.clone();

		Box::pin(async move { Ok(rows) })
	}
}
