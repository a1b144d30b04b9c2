//! Picks the single most plausible human-written line out of a raw email.
//!
//! Two heuristics exist. [`ExtractorKind::Mime`] decodes the message and walks the first
//! plain-text part, stopping at the first signature or reply boundary.
//! [`ExtractorKind::Naive`] splits headers from body at the first blank line and skips noise
//! lines, falling back to the very first body line when every line looks like noise.

use std::sync::LazyLock;

use mail_parser::{Message, MessageParser};
use regex::Regex;

pub use quotebox_config::ExtractorKind;

/// Upper bound on the lines collected by the MIME walk.
pub const MAX_CANDIDATES: usize = 10;

static BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| compile(r"\r?\n\r?\n"));
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| compile(r"\r?\n"));
static NAIVE_SKIP: LazyLock<Vec<Regex>> = LazyLock::new(|| {
	[
		r"^>",
		r"(?i)^On .* wrote:$",
		r"(?i)^From:\s",
		r"(?i)^Subject:\s",
		r"(?i)^To:\s",
		r"(?i)^Sent:\s",
		r"^--\s*$",
	]
	.into_iter()
	.map(compile)
	.collect()
});
static MIME_STOP: LazyLock<Vec<Regex>> = LazyLock::new(|| {
	[
		r"(?i)^On .+ wrote:$",
		r"(?i)^From:",
		r"(?i)^Sent:",
		r"(?i)^Subject:",
		r"(?i)^To:",
		r"(?i)^-----Original Message-----$",
	]
	.into_iter()
	.map(compile)
	.collect()
});

pub fn extract(raw: &str, kind: ExtractorKind) -> Option<String> {
	match kind {
		ExtractorKind::Mime => extract_candidates(raw).into_iter().next(),
		ExtractorKind::Naive => extract_naive(raw),
	}
}

/// Returns up to [`MAX_CANDIDATES`] clean lines from the first plain-text part, in order.
pub fn extract_candidates(raw: &str) -> Vec<String> {
	match parse_message(raw) {
		Some(message) => candidates_from_message(&message),
		None => Vec::new(),
	}
}

pub fn extract_naive(raw: &str) -> Option<String> {
	let body = naive_body(raw);
	let lines = LINE_BREAK
		.split(&body)
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.collect::<Vec<_>>();
	let first = *lines.first()?;
	let candidate = lines
		.iter()
		.copied()
		.find(|line| !NAIVE_SKIP.iter().any(|re| re.is_match(line)))
		.unwrap_or(first);

	Some(candidate.to_string())
}

/// Everything after the first blank line, trimmed. Empty when the payload has no body.
pub fn naive_body(raw: &str) -> String {
	let mut parts = BLANK_LINE.split(raw);

	parts.next();

	parts.collect::<Vec<_>>().join("\n\n").trim().to_string()
}

pub(crate) fn parse_message(raw: &str) -> Option<Message<'_>> {
	MessageParser::default().parse(raw.as_bytes())
}

pub(crate) fn candidates_from_message(message: &Message<'_>) -> Vec<String> {
	match message.body_text(0) {
		Some(text) => candidates_from_text(&text),
		None => Vec::new(),
	}
}

fn candidates_from_text(body: &str) -> Vec<String> {
	let normalized = body.trim().replace("\r\n", "\n").replace('\r', "\n");
	let mut out = Vec::new();

	for line in normalized.split('\n').map(str::trim) {
		if line.is_empty() || line.starts_with('>') {
			continue;
		}
		if line == "--" || MIME_STOP.iter().any(|re| re.is_match(line)) {
			break;
		}

		out.push(line.to_string());

		if out.len() == MAX_CANDIDATES {
			break;
		}
	}

	out
}

fn compile(pattern: &str) -> Regex {
	Regex::new(pattern).unwrap_or_else(|err| panic!("Invalid built-in pattern {pattern:?}: {err}."))
}
