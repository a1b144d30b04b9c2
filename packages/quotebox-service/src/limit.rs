pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 100;

/// Interprets a `limit` query value.
///
/// Missing, non-numeric, non-finite and zero values fall back to [`DEFAULT_LIMIT`]. Anything
/// else is truncated toward zero and clamped to `1..=MAX_LIMIT`.
pub fn resolve_limit(raw: Option<&str>) -> usize {
	match raw.map(str::trim).and_then(|value| value.parse::<f64>().ok()) {
		Some(value) if value.is_finite() && value != 0.0 =>
			value.trunc().clamp(1.0, MAX_LIMIT as f64) as usize,
		_ => DEFAULT_LIMIT,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn falls_back_to_default() {
		for raw in [None, Some(""), Some("abc"), Some("0"), Some("NaN"), Some("inf")] {
			assert_eq!(resolve_limit(raw), DEFAULT_LIMIT, "{raw:?}");
		}
	}

	#[test]
	fn clamps_to_range() {
		assert_eq!(resolve_limit(Some("5")), 5);
		assert_eq!(resolve_limit(Some(" 7 ")), 7);
		assert_eq!(resolve_limit(Some("500")), MAX_LIMIT);
		assert_eq!(resolve_limit(Some("1e2")), 100);
		assert_eq!(resolve_limit(Some("-3")), 1);
		assert_eq!(resolve_limit(Some("0.5")), 1);
		assert_eq!(resolve_limit(Some("12.9")), 12);
	}
}
