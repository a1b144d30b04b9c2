use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AddQuoteRequest, Error, QuoteService, Result};
use quotebox_domain::inbound;

#[derive(Clone, Debug, Default)]
pub struct IngestRawRequest {
	/// Value of the `Authorization` header, if any.
	pub authorization: Option<String>,
	/// The RFC822/MIME message as delivered by the mail webhook.
	pub raw: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestRawResponse {
	pub ok: bool,
	pub quote: String,
	pub id: Uuid,
	pub deduped: bool,
}

impl QuoteService {
	/// Authenticates the webhook, extracts a quote from the raw email and stores it.
	///
	/// Nothing is written unless both the credential check and the extraction succeed.
	pub async fn ingest_raw(&self, req: IngestRawRequest) -> Result<IngestRawResponse> {
		self.authorize_webhook(req.authorization.as_deref())?;

		let email = inbound::read_inbound(&req.raw, self.cfg.ingest.extractor);
		let Some(quote) = email.quote else {
			tracing::info!(
				extractor = ?self.cfg.ingest.extractor,
				bytes = req.raw.len(),
				"No quote found in inbound email."
			);

			return Err(Error::NoQuoteFound);
		};
		let added = self
			.add(AddQuoteRequest {
				quote: quote.clone(),
				from: email.headers.from,
				subject: email.headers.subject,
				message_id: email.headers.message_id,
			})
			.await?;

		tracing::info!(quote_id = %added.id, deduped = added.deduped, "Ingested quote.");

		Ok(IngestRawResponse { ok: true, quote, id: added.id, deduped: added.deduped })
	}
}
