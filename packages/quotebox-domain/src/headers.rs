use mail_parser::Message;

/// Header values carried alongside an extracted quote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailHeaders {
	pub from: Option<String>,
	pub subject: Option<String>,
	pub message_id: Option<String>,
}

/// Reads headers from the block before the first blank line, without decoding.
///
/// Names match case-insensitively and folded continuation lines are joined with a single space.
pub fn read_raw_headers(raw: &str) -> EmailHeaders {
	EmailHeaders {
		from: raw_header(raw, "From"),
		subject: raw_header(raw, "Subject"),
		message_id: raw_header(raw, "Message-ID").and_then(|value| normalize_message_id(&value)),
	}
}

pub fn raw_header(raw: &str, name: &str) -> Option<String> {
	let mut value: Option<String> = None;

	for line in raw.lines() {
		let line = line.strip_suffix('\r').unwrap_or(line);

		if line.trim().is_empty() {
			break;
		}
		if line.starts_with([' ', '\t']) {
			if let Some(current) = value.as_mut() {
				current.push(' ');
				current.push_str(line.trim());
			}

			continue;
		}
		if value.is_some() {
			break;
		}
		if let Some((key, rest)) = line.split_once(':')
			&& key.trim_end().eq_ignore_ascii_case(name)
		{
			value = Some(rest.trim().to_string());
		}
	}

	value.filter(|value| !value.is_empty())
}

pub(crate) fn read_mime_headers(message: &Message<'_>) -> EmailHeaders {
	let from = message.from().and_then(|address| address.first()).and_then(|addr| {
		match (addr.name().map(str::trim), addr.address().map(str::trim)) {
			(Some(name), Some(address)) if !name.is_empty() => Some(format!("{name} <{address}>")),
			(_, Some(address)) => Some(address.to_string()),
			(Some(name), None) => Some(name.to_string()),
			(None, None) => None,
		}
	});

	EmailHeaders {
		from: from.filter(|value| !value.is_empty()),
		subject: message
			.subject()
			.map(str::trim)
			.filter(|value| !value.is_empty())
			.map(str::to_string),
		message_id: message.message_id().and_then(normalize_message_id),
	}
}

/// Trims whitespace and one pair of surrounding angle brackets.
pub fn normalize_message_id(value: &str) -> Option<String> {
	let trimmed = value.trim();
	let inner = trimmed
		.strip_prefix('<')
		.and_then(|rest| rest.strip_suffix('>'))
		.unwrap_or(trimmed)
		.trim();

	if inner.is_empty() { None } else { Some(inner.to_string()) }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_headers_case_insensitively() {
		let raw = "from: Alice <alice@example.com>\r\nSUBJECT: Hi\r\nMessage-Id: <abc@x>\r\n\r\nFrom: body";
		let headers = read_raw_headers(raw);

		assert_eq!(headers.from.as_deref(), Some("Alice <alice@example.com>"));
		assert_eq!(headers.subject.as_deref(), Some("Hi"));
		assert_eq!(headers.message_id.as_deref(), Some("abc@x"));
	}

	#[test]
	fn ignores_body_lines_that_look_like_headers() {
		let raw = "Subject: Hi\n\nFrom: someone@example.com";

		assert_eq!(raw_header(raw, "From"), None);
	}

	#[test]
	fn joins_folded_lines() {
		let raw = "Subject: a long\n\tsubject line\nTo: x\n\nbody";

		assert_eq!(raw_header(raw, "Subject").as_deref(), Some("a long subject line"));
	}

	#[test]
	fn empty_values_are_absent() {
		assert_eq!(raw_header("Subject:   \n\nbody", "Subject"), None);
		assert_eq!(normalize_message_id("<>"), None);
		assert_eq!(normalize_message_id("  "), None);
	}

	#[test]
	fn message_id_brackets_are_optional() {
		assert_eq!(normalize_message_id(" <id@host> ").as_deref(), Some("id@host"));
		assert_eq!(normalize_message_id("id@host").as_deref(), Some("id@host"));
	}
}
