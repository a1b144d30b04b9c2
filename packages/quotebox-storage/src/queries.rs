use uuid::Uuid;

use crate::{
	BoxFuture, Error, LeaderboardStore, QuoteStore, Result,
	db::Db,
	models::{InsertOutcome, LeaderboardRow, QuoteRow},
};

const QUOTE_COLUMNS: &str = "quote_id, quote, from_addr, subject, message_id, created_at";

pub async fn insert_quote_if_absent(db: &Db, quote: &QuoteRow) -> Result<InsertOutcome> {
	// The partial unique index on message_id turns a concurrent duplicate into a no-op.
	let inserted: Option<Uuid> = sqlx::query_scalar(
		"\
INSERT INTO quotes (
	quote_id,
	quote,
	from_addr,
	subject,
	message_id,
	created_at
)
VALUES ($1, $2, $3, $4, $5, $6)
ON CONFLICT (message_id) WHERE message_id IS NOT NULL DO NOTHING
RETURNING quote_id",
	)
	.bind(quote.quote_id)
	.bind(quote.quote.as_str())
	.bind(quote.from_addr.as_deref())
	.bind(quote.subject.as_deref())
	.bind(quote.message_id.as_deref())
	.bind(quote.created_at)
	.fetch_optional(&db.pool)
	.await?;

	if let Some(quote_id) = inserted {
		return Ok(InsertOutcome::Inserted(quote_id));
	}

	let Some(message_id) = quote.message_id.as_deref() else {
		return Err(Error::Conflict(format!("Quote {} already exists.", quote.quote_id)));
	};
	let existing: Option<Uuid> =
		sqlx::query_scalar("SELECT quote_id FROM quotes WHERE message_id = $1 LIMIT 1")
			.bind(message_id)
			.fetch_optional(&db.pool)
			.await?;

	existing.map(InsertOutcome::Existing).ok_or_else(|| {
		Error::Conflict(format!("Quote with message_id {message_id:?} vanished during insert."))
	})
}

pub async fn latest_quotes(db: &Db, limit: usize) -> Result<Vec<QuoteRow>> {
	let limit = i64::try_from(limit)
		.map_err(|_| Error::InvalidArgument(format!("Limit {limit} is out of range.")))?;
	let sql = format!(
		"SELECT {QUOTE_COLUMNS} FROM quotes ORDER BY created_at DESC, quote_id DESC LIMIT $1"
	);
	let rows = sqlx::query_as::<_, QuoteRow>(&sql).bind(limit).fetch_all(&db.pool).await?;

	Ok(rows)
}

pub async fn random_quote(db: &Db) -> Result<Option<QuoteRow>> {
	let sql = format!("SELECT {QUOTE_COLUMNS} FROM quotes ORDER BY random() LIMIT 1");
	let row = sqlx::query_as::<_, QuoteRow>(&sql).fetch_optional(&db.pool).await?;

	Ok(row)
}

pub async fn leaderboard_entries(db: &Db) -> Result<Vec<LeaderboardRow>> {
	let rows = sqlx::query_as::<_, LeaderboardRow>(
		"SELECT entry_id, doc FROM leaderboard ORDER BY created_at ASC, entry_id ASC",
	)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

impl QuoteStore for Db {
	fn insert_quote_if_absent<'a>(
		&'a self,
		quote: &'a QuoteRow,
	) -> BoxFuture<'a, Result<InsertOutcome>> {
		Box::pin(insert_quote_if_absent(self, quote))
	}

	fn latest_quotes<'a>(&'a self, limit: usize) -> BoxFuture<'a, Result<Vec<QuoteRow>>> {
		Box::pin(latest_quotes(self, limit))
	}

	fn random_quote<'a>(&'a self) -> BoxFuture<'a, Result<Option<QuoteRow>>> {
		Box::pin(random_quote(self))
	}
}

impl LeaderboardStore for Db {
	fn leaderboard_entries<'a>(&'a self) -> BoxFuture<'a, Result<Vec<LeaderboardRow>>> {
		Box::pin(leaderboard_entries(self))
	}
}
