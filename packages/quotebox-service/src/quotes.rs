use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, QuoteService, Result, limit};
use quotebox_storage::models::QuoteRow;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
	pub id: Uuid,
	pub quote: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub from: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub subject: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message_id: Option<String>,
	/// Milliseconds since the Unix epoch.
	pub created_at: i64,
}
impl From<QuoteRow> for Quote {
	fn from(row: QuoteRow) -> Self {
		Self {
			id: row.quote_id,
			quote: row.quote,
			from: row.from_addr,
			subject: row.subject,
			message_id: row.message_id,
			created_at: row.created_at,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct AddQuoteRequest {
	pub quote: String,
	pub from: Option<String>,
	pub subject: Option<String>,
	pub message_id: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddQuoteResponse {
	pub id: Uuid,
	pub deduped: bool,
}

#[derive(Clone, Debug, Default)]
pub struct LatestRequest {
	pub read_key: Option<String>,
	/// Raw `limit` query value.
	pub limit: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LatestResponse {
	pub quotes: Vec<Quote>,
}

#[derive(Clone, Debug, Default)]
pub struct RandomRequest {
	pub read_key: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RandomResponse {
	pub quote: Option<Quote>,
}

impl QuoteService {
	/// Stores a quote unless one with the same message id already exists.
	pub async fn add(&self, req: AddQuoteRequest) -> Result<AddQuoteResponse> {
		let quote = req.quote.trim();

		if quote.is_empty() {
			return Err(Error::InvalidRequest { message: "quote must be non-empty.".to_string() });
		}

		let row = QuoteRow {
			quote_id: Uuid::new_v4(),
			quote: quote.to_string(),
			from_addr: req.from,
			subject: req.subject,
			message_id: req
				.message_id
				.map(|value| value.trim().to_string())
				.filter(|value| !value.is_empty()),
			created_at: crate::now_millis(),
		};
		let outcome = self.quotes.insert_quote_if_absent(&row).await?;

		if outcome.deduped() {
			tracing::info!(
				quote_id = %outcome.quote_id(),
				message_id = row.message_id.as_deref().unwrap_or_default(),
				"Quote already stored for this message."
			);
		}

		Ok(AddQuoteResponse { id: outcome.quote_id(), deduped: outcome.deduped() })
	}

	pub async fn latest(&self, req: LatestRequest) -> Result<LatestResponse> {
		self.authorize_read(req.read_key.as_deref())?;

		let limit = limit::resolve_limit(req.limit.as_deref());
		let rows = self.quotes.latest_quotes(limit).await?;

		Ok(LatestResponse { quotes: rows.into_iter().take(limit).map(Quote::from).collect() })
	}

	pub async fn random(&self, req: RandomRequest) -> Result<RandomResponse> {
		self.authorize_read(req.read_key.as_deref())?;

		let row = self.quotes.random_quote().await?;

		Ok(RandomResponse { quote: row.map(Quote::from) })
	}
}
