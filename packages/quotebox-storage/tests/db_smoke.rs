use uuid::Uuid;

use quotebox_config::Postgres;
use quotebox_storage::{
	LeaderboardStore, QuoteStore,
	db::Db,
	models::{InsertOutcome, QuoteRow},
};
use quotebox_testkit::TestDatabase;

async fn connect(test_db: &TestDatabase) -> Db {
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	db
}

fn row(quote: &str, message_id: Option<&str>, created_at: i64) -> QuoteRow {
	QuoteRow {
		quote_id: Uuid::new_v4(),
		quote: quote.to_string(),
		from_addr: Some("alice@example.com".to_string()),
		subject: None,
		message_id: message_id.map(str::to_string),
		created_at,
	}
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set QUOTEBOX_PG_DSN to run."]
async fn db_connects_and_bootstraps_twice() {
	let Some(base_dsn) = quotebox_testkit::env_dsn() else {
		eprintln!("Skipping db_connects_and_bootstraps_twice; set QUOTEBOX_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = connect(&test_db).await;

	db.ensure_schema().await.expect("Schema bootstrap must be idempotent.");

	let count: i64 = sqlx::query_scalar(
		"SELECT count(*) FROM information_schema.tables WHERE table_name IN ('quotes', 'leaderboard')",
	)
	.fetch_one(&db.pool)
	.await
	.expect("Failed to query schema tables.");

	assert_eq!(count, 2);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set QUOTEBOX_PG_DSN to run."]
async fn message_id_deduplicates_in_postgres() {
	let Some(base_dsn) = quotebox_testkit::env_dsn() else {
		eprintln!("Skipping message_id_deduplicates_in_postgres; set QUOTEBOX_PG_DSN to run.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = connect(&test_db).await;
	let first = row("first", Some("m1@example.com"), 1_000);
	let second = row("second", Some("m1@example.com"), 2_000);
	let first_outcome =
		db.insert_quote_if_absent(&first).await.expect("Failed to insert first quote.");
	let second_outcome =
		db.insert_quote_if_absent(&second).await.expect("Failed to insert second quote.");

	assert_eq!(first_outcome, InsertOutcome::Inserted(first.quote_id));
	assert_eq!(second_outcome, InsertOutcome::Existing(first.quote_id));

	db.insert_quote_if_absent(&row("anon", None, 3_000)).await.expect("Failed to insert.");
	db.insert_quote_if_absent(&row("anon", None, 3_000)).await.expect("Failed to insert.");

	let count: i64 = sqlx::query_scalar("SELECT count(*) FROM quotes")
		.fetch_one(&db.pool)
		.await
		.expect("Failed to count quotes.");

	assert_eq!(count, 3);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set QUOTEBOX_PG_DSN to run."]
async fn latest_random_and_leaderboard_read_back() {
	let Some(base_dsn) = quotebox_testkit::env_dsn() else {
		eprintln!("Skipping latest_random_and_leaderboard_read_back; set QUOTEBOX_PG_DSN to run.");

		return;
	};

	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = connect(&test_db).await;

	for (quote, created_at) in [("old", 10), ("new", 30), ("mid", 20)] {
		db.insert_quote_if_absent(&row(quote, None, created_at))
			.await
			.expect("Failed to insert quote.");
	}

	let latest = db.latest_quotes(2).await.expect("Failed to read latest quotes.");

	assert_eq!(latest.iter().map(|row| row.quote.as_str()).collect::<Vec<_>>(), ["new", "mid"]);
	assert!(db.random_quote().await.expect("Failed to read random quote.").is_some());

	for doc in [serde_json::json!({ "name": "a", "score": 1 }), serde_json::json!({ "name": "b" })] {
		sqlx::query("INSERT INTO leaderboard (entry_id, doc) VALUES ($1, $2)")
			.bind(Uuid::new_v4())
			.bind(doc)
			.execute(&db.pool)
			.await
			.expect("Failed to insert leaderboard entry.");
	}

	let entries = db.leaderboard_entries().await.expect("Failed to read leaderboard.");

	assert_eq!(entries.len(), 2);
	assert_eq!(entries[0].doc["name"], "a");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
