use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{QuoteService, Result, limit};
use quotebox_storage::models::LeaderboardRow;

/// Key under which the store id is emitted next to the entry's own fields.
pub const ENTRY_ID_KEY: &str = "_id";

#[derive(Clone, Debug, Default)]
pub struct TopRequest {
	/// Raw `limit` query value.
	pub limit: Option<String>,
}

/// A scored document maintained outside this service.
#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
	pub id: Uuid,
	pub fields: Map<String, Value>,
}
impl LeaderboardEntry {
	/// Numeric `score`, or zero when it is missing or not a number.
	pub fn score(&self) -> f64 {
		self.fields.get("score").and_then(Value::as_f64).unwrap_or(0.0)
	}
}
impl From<LeaderboardRow> for LeaderboardEntry {
	fn from(row: LeaderboardRow) -> Self {
		let fields = match row.doc {
			Value::Object(map) => map,
			Value::Null => Map::new(),
			other => Map::from_iter([("value".to_string(), other)]),
		};

		Self { id: row.entry_id, fields }
	}
}
impl Serialize for LeaderboardEntry {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let passthrough = self.fields.iter().filter(|(key, _)| key.as_str() != ENTRY_ID_KEY);
		let mut map = serializer.serialize_map(None)?;

		map.serialize_entry(ENTRY_ID_KEY, &self.id)?;

		for (key, value) in passthrough {
			map.serialize_entry(key, value)?;
		}

		map.end()
	}
}

impl QuoteService {
	/// Highest score first. Equal scores keep the store's iteration order.
	pub async fn top(&self, req: TopRequest) -> Result<Vec<LeaderboardEntry>> {
		let limit = limit::resolve_limit(req.limit.as_deref());
		let mut entries = self
			.leaderboard
			.leaderboard_entries()
			.await?
			.into_iter()
			.map(LeaderboardEntry::from)
			.collect::<Vec<_>>();

		entries.sort_by(|a, b| b.score().total_cmp(&a.score()));
		entries.truncate(limit);

		Ok(entries)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn entry(doc: Value) -> LeaderboardEntry {
		LeaderboardEntry::from(LeaderboardRow { entry_id: Uuid::nil(), doc })
	}

	#[test]
	fn score_defaults_to_zero() {
		assert_eq!(entry(json!({ "score": 4.5 })).score(), 4.5);
		assert_eq!(entry(json!({ "score": 3 })).score(), 3.0);
		assert_eq!(entry(json!({ "name": "x" })).score(), 0.0);
		assert_eq!(entry(json!({ "score": "12" })).score(), 0.0);
		assert_eq!(entry(json!(7)).score(), 0.0);
	}

	#[test]
	fn serializes_id_alongside_fields() {
		let value = serde_json::to_value(entry(json!({ "name": "x", "score": 2, "_id": "spoof" })))
			.expect("Failed to serialize entry.");

		assert_eq!(value, json!({ "_id": Uuid::nil(), "name": "x", "score": 2 }));
	}
}
