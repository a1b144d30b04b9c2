use axum::{
	Json, Router,
	body::Bytes,
	extract::{DefaultBodyLimit, Query, State},
	http::{HeaderMap, StatusCode, header::AUTHORIZATION},
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use quotebox_service::{
	Error as ServiceError, IngestRawRequest, IngestRawResponse, LatestRequest, LatestResponse,
	LeaderboardEntry, RandomRequest, RandomResponse, TopRequest, access::READ_KEY_HEADER,
};

/// Largest raw email `/ingest-raw` accepts, attachments included.
pub const MAX_RAW_EMAIL_BYTES: usize = 25 * 1024 * 1024;

#[derive(Debug, Default, Deserialize)]
struct LimitQuery {
	limit: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::ServerMisconfigured { message } => json_error(
				StatusCode::INTERNAL_SERVER_ERROR,
				"SERVER_MISCONFIGURED",
				format!("Server misconfigured: {message}"),
				None,
			),
			ServiceError::Unauthorized { message } =>
				json_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message, None),
			ServiceError::NoQuoteFound => json_error(
				StatusCode::BAD_REQUEST,
				"NO_QUOTE_FOUND",
				"No quote found in the email body.",
				None,
			),
			ServiceError::InvalidRequest { message } =>
				json_error(StatusCode::BAD_REQUEST, "INVALID_REQUEST", message, None),
			ServiceError::Storage { message } => {
				tracing::error!(error = %message, "Storage request failed.");

				json_error(
					StatusCode::INTERNAL_SERVER_ERROR,
					"STORAGE_ERROR",
					"Storage request failed.",
					None,
				)
			},
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code, message: self.message, fields: self.fields };

		(self.status, Json(body)).into_response()
	}
}

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/quotes/latest", get(quotes_latest))
		.route("/quotes/random", get(quotes_random))
		.route("/ingest-raw", post(ingest_raw).layer(DefaultBodyLimit::max(MAX_RAW_EMAIL_BYTES)))
		.route("/leaderboard/top", get(leaderboard_top))
		.with_state(state)
}

pub fn json_error(
	status: StatusCode,
	code: &str,
	message: impl Into<String>,
	fields: Option<Vec<String>>,
) -> ApiError {
	ApiError::new(status, code, message, fields)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn quotes_latest(
	State(state): State<AppState>,
	headers: HeaderMap,
	Query(query): Query<LimitQuery>,
) -> Result<Json<LatestResponse>, ApiError> {
	let read_key = header_value(&headers, READ_KEY_HEADER);
	let response = state.service.latest(LatestRequest { read_key, limit: query.limit }).await?;

	Ok(Json(response))
}

async fn quotes_random(
	State(state): State<AppState>,
	headers: HeaderMap,
) -> Result<Json<RandomResponse>, ApiError> {
	let read_key = header_value(&headers, READ_KEY_HEADER);
	let response = state.service.random(RandomRequest { read_key }).await?;

	Ok(Json(response))
}

/// Takes the message verbatim. Bytes that are not valid UTF-8 are replaced before extraction.
async fn ingest_raw(
	State(state): State<AppState>,
	headers: HeaderMap,
	body: Bytes,
) -> Result<Json<IngestRawResponse>, ApiError> {
	let authorization = header_value(&headers, AUTHORIZATION.as_str());
	let raw = String::from_utf8_lossy(&body).into_owned();
	let response = state.service.ingest_raw(IngestRawRequest { authorization, raw }).await?;

	Ok(Json(response))
}

async fn leaderboard_top(
	State(state): State<AppState>,
	Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
	let entries = state.service.top(TopRequest { limit: query.limit }).await?;

	Ok(Json(entries))
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
	headers.get(name)?.to_str().ok().map(|value| value.trim().to_string())
}
