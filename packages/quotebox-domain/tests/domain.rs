use quotebox_domain::{
	extract::{self, ExtractorKind},
	inbound,
};

const SCENARIO: &str = "Subject: Hi\n\nHello there\n> old reply\n--\nsig";

const MULTIPART: &str = "\
From: Alice Example <alice@example.com>\r
To: quotes@example.com\r
Subject: =?UTF-8?B?SMOpbGxv?=\r
Message-ID: <m1@example.com>\r
MIME-Version: 1.0\r
Content-Type: multipart/alternative; boundary=\"b1\"\r
\r
--b1\r
Content-Type: text/plain; charset=utf-8\r
Content-Transfer-Encoding: quoted-printable\r
\r
Caf=C3=A9 is a state of mind.\r
\r
--=20\r
Alice\r
\r
--b1\r
Content-Type: text/html; charset=utf-8\r
\r
<p>Caf&eacute; is a state of mind.</p>\r
--b1--\r
";

const BASE64_BODY: &str = "\
From: bob@example.com\r
Subject: encoded\r
MIME-Version: 1.0\r
Content-Type: text/plain; charset=utf-8\r
Content-Transfer-Encoding: base64\r
\r
SGVsbG8gZnJvbSBiYXNlNjQ=\r
";

#[test]
fn scenario_email_yields_first_line_with_both_heuristics() {
	assert_eq!(extract::extract(SCENARIO, ExtractorKind::Mime).as_deref(), Some("Hello there"));
	assert_eq!(extract::extract(SCENARIO, ExtractorKind::Naive).as_deref(), Some("Hello there"));
}

#[test]
fn first_plain_line_is_returned_trimmed() {
	let raw = "From: a@example.com\nSubject: s\n\n   Stay hungry, stay foolish.   \nsecond line\n";

	for kind in [ExtractorKind::Mime, ExtractorKind::Naive] {
		assert_eq!(
			extract::extract(raw, kind).as_deref(),
			Some("Stay hungry, stay foolish."),
			"{kind:?}"
		);
	}
}

#[test]
fn headers_without_body_yield_nothing() {
	let raw = "From: a@example.com\nSubject: Hi\nTo: quotes@example.com";

	assert_eq!(extract::extract(raw, ExtractorKind::Mime), None);
	assert_eq!(extract::extract(raw, ExtractorKind::Naive), None);
}

#[test]
fn quoted_reply_only_body_yields_nothing() {
	let raw = "Subject: Re: Hi\n\n> earlier message\n>> even earlier\n";

	assert_eq!(extract::extract(raw, ExtractorKind::Mime), None);
}

#[test]
fn signature_only_body_yields_nothing() {
	let raw = "Subject: sig\n\n-- \nAlice\nhttps://example.com\n";

	assert_eq!(extract::extract(raw, ExtractorKind::Mime), None);
}

#[test]
fn naive_falls_back_to_first_line_when_everything_is_noise() {
	// The naive heuristic returns the first body line even when it is a quoted reply.
	let raw = "Subject: Re: Hi\n\n> earlier message\n>> even earlier\n";

	assert_eq!(extract::extract(raw, ExtractorKind::Naive).as_deref(), Some("> earlier message"));
}

#[test]
fn naive_skips_signature_delimiter_but_keeps_following_lines() {
	let raw = "Subject: sig\n\n-- \nAlice\n";

	assert_eq!(extract::extract(raw, ExtractorKind::Naive).as_deref(), Some("Alice"));
}

#[test]
fn naive_skips_reply_header_residue() {
	let raw = "Subject: fwd\n\nOn Mon, Bob wrote:\nFrom: bob@example.com\nSent: Monday\nActual words.\n";

	assert_eq!(extract::extract(raw, ExtractorKind::Naive).as_deref(), Some("Actual words."));
}

#[test]
fn mime_stops_at_outlook_reply_marker() {
	let raw = "Subject: x\n\n-----Original Message-----\nFrom: bob@example.com\nolder text\n";

	assert_eq!(extract::extract(raw, ExtractorKind::Mime), None);
}

#[test]
fn mime_decodes_multipart_quoted_printable() {
	assert_eq!(
		extract::extract(MULTIPART, ExtractorKind::Mime).as_deref(),
		Some("Café is a state of mind.")
	);
	assert_eq!(extract::extract_candidates(MULTIPART), vec!["Café is a state of mind.".to_string()]);
}

#[test]
fn mime_decodes_base64_body() {
	assert_eq!(
		extract::extract(BASE64_BODY, ExtractorKind::Mime).as_deref(),
		Some("Hello from base64")
	);
}

#[test]
fn inbound_mime_reads_decoded_headers() {
	let email = inbound::read_inbound(MULTIPART, ExtractorKind::Mime);

	assert_eq!(email.quote.as_deref(), Some("Café is a state of mind."));
	assert_eq!(email.headers.from.as_deref(), Some("Alice Example <alice@example.com>"));
	assert_eq!(email.headers.subject.as_deref(), Some("Héllo"));
	assert_eq!(email.headers.message_id.as_deref(), Some("m1@example.com"));
}

#[test]
fn inbound_naive_reads_raw_headers() {
	let raw = "From: Alice <alice@example.com>\nSubject: Hi\nMessage-ID: <m2@example.com>\n\nHello there\n";
	let email = inbound::read_inbound(raw, ExtractorKind::Naive);

	assert_eq!(email.quote.as_deref(), Some("Hello there"));
	assert_eq!(email.headers.from.as_deref(), Some("Alice <alice@example.com>"));
	assert_eq!(email.headers.subject.as_deref(), Some("Hi"));
	assert_eq!(email.headers.message_id.as_deref(), Some("m2@example.com"));
}

#[test]
fn both_heuristics_agree_on_message_id() {
	let raw = "From: a@example.com\nSubject: s\nMessage-ID: <same@example.com>\n\nwords\n";
	let mime = inbound::read_inbound(raw, ExtractorKind::Mime);
	let naive = inbound::read_inbound(raw, ExtractorKind::Naive);

	assert_eq!(mime.headers.message_id, naive.headers.message_id);
}
