use serde_json::Value;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct QuoteRow {
	pub quote_id: Uuid,
	pub quote: String,
	pub from_addr: Option<String>,
	pub subject: Option<String>,
	pub message_id: Option<String>,
	/// Milliseconds since the Unix epoch.
	pub created_at: i64,
}

#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct LeaderboardRow {
	pub entry_id: Uuid,
	pub doc: Value,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
	Inserted(Uuid),
	Existing(Uuid),
}
impl InsertOutcome {
	pub fn quote_id(self) -> Uuid {
		match self {
			Self::Inserted(id) | Self::Existing(id) => id,
		}
	}

	pub fn deduped(self) -> bool {
		matches!(self, Self::Existing(_))
	}
}
