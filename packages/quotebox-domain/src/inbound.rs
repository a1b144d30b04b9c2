use crate::{
	extract::{self, ExtractorKind},
	headers::{self, EmailHeaders},
};

/// What one raw email yields for ingestion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InboundEmail {
	pub quote: Option<String>,
	pub headers: EmailHeaders,
}

/// Reads the quote and its headers with the same heuristic, parsing the message once.
pub fn read_inbound(raw: &str, kind: ExtractorKind) -> InboundEmail {
	match kind {
		ExtractorKind::Mime => {
			let Some(message) = extract::parse_message(raw) else {
				return InboundEmail::default();
			};

			InboundEmail {
				quote: extract::candidates_from_message(&message).into_iter().next(),
				headers: headers::read_mime_headers(&message),
			}
		},
		ExtractorKind::Naive => InboundEmail {
			quote: extract::extract_naive(raw),
			headers: headers::read_raw_headers(raw),
		},
	}
}
