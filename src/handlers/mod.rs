pub mod review;
pub mod settings;
pub mod stats;
pub mod verses;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::db::{self, DbPool, LogOnError};

pub use review::{due_verses, submit_review};
pub use settings::{show_settings, update_settings};
pub use stats::stats;
pub use verses::{list_verses, track_verse, untrack_verse, verse_detail};

/// JSON error body shared by all handlers
#[derive(Serialize)]
pub struct ErrorBody {
  pub error: String,
}

pub(crate) type ApiError = (StatusCode, Json<ErrorBody>);

pub(crate) fn bad_request(msg: impl Into<String>) -> ApiError {
  (StatusCode::BAD_REQUEST, Json(ErrorBody { error: msg.into() }))
}

pub(crate) fn not_found(msg: impl Into<String>) -> ApiError {
  (StatusCode::NOT_FOUND, Json(ErrorBody { error: msg.into() }))
}

pub(crate) fn conflict(msg: impl Into<String>) -> ApiError {
  (StatusCode::CONFLICT, Json(ErrorBody { error: msg.into() }))
}

pub(crate) fn db_unavailable() -> ApiError {
  (
    StatusCode::SERVICE_UNAVAILABLE,
    Json(ErrorBody {
      error: "database unavailable".to_string(),
    }),
  )
}

pub(crate) fn internal(e: impl std::fmt::Display) -> ApiError {
  tracing::error!("request failed: {}", e);
  (
    StatusCode::INTERNAL_SERVER_ERROR,
    Json(ErrorBody {
      error: e.to_string(),
    }),
  )
}

pub fn router(pool: DbPool) -> Router {
  Router::new()
    .route("/", get(index))
    .route("/due", get(review::due_verses))
    .route("/review", post(review::submit_review))
    .route("/verses", get(verses::list_verses).post(verses::track_verse))
    .route("/verses/{id}", get(verses::verse_detail).delete(verses::untrack_verse))
    .route("/stats", get(stats::stats))
    .route("/settings", get(settings::show_settings).post(settings::update_settings))
    .layer(TraceLayer::new_for_http())
    .with_state(pool)
}

#[derive(Serialize)]
pub struct IndexResponse {
  pub due_count: i64,
  pub total_tracked: i64,
  pub reviews_today: i64,
  pub next_due: Option<DateTime<Utc>>,
  pub active_profile: &'static str,
}

pub async fn index(State(pool): State<DbPool>) -> Result<Json<IndexResponse>, ApiError> {
  let conn = db::try_lock(&pool).map_err(|_| db_unavailable())?;
  let now = Utc::now();

  let due_count = db::get_due_count(&conn, now).map_err(internal)?;
  let total_tracked = db::get_total_tracked(&conn).map_err(internal)?;
  let reviews_today = db::count_reviews_on(&conn, now).log_warn_default("count reviews today");

  // Only meaningful when nothing is waiting
  let next_due = if due_count == 0 {
    db::get_next_due_time(&conn).log_warn("next due time").flatten()
  } else {
    None
  };

  Ok(Json(IndexResponse {
    due_count,
    total_tracked,
    reviews_today,
    next_due,
    active_profile: db::get_active_profile(&conn).name,
  }))
}
