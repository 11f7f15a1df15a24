use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::db::{self, DbPool};
use crate::domain::{ReviewLog, ScheduleState, TrackedVerse, VerseRef};

use super::{ApiError, bad_request, conflict, db_unavailable, internal, not_found};

#[derive(Serialize)]
pub struct VerseResponse {
  pub id: i64,
  pub reference: String,
  pub surah_name: &'static str,
  pub schedule: ScheduleState,
  pub learned_at: DateTime<Utc>,
}

impl From<TrackedVerse> for VerseResponse {
  fn from(v: TrackedVerse) -> Self {
    Self {
      id: v.id,
      reference: v.verse.to_string(),
      surah_name: v.verse.surah_name(),
      schedule: v.schedule,
      learned_at: v.learned_at,
    }
  }
}

/// Everything currently tracked, in mushaf order
pub async fn list_verses(State(pool): State<DbPool>) -> Result<Json<Vec<VerseResponse>>, ApiError> {
  let conn = db::try_lock(&pool).map_err(|_| db_unavailable())?;
  let verses = db::get_all_tracked(&conn).map_err(internal)?;
  Ok(Json(verses.into_iter().map(VerseResponse::from).collect()))
}

#[derive(Deserialize)]
pub struct TrackRequest {
  /// "surah:ayah" notation, e.g. "2:255"
  pub reference: String,
}

/// Start tracking a freshly memorized ayah
pub async fn track_verse(
  State(pool): State<DbPool>,
  Json(req): Json<TrackRequest>,
) -> Result<impl IntoResponse, ApiError> {
  let verse = VerseRef::from_str(&req.reference).ok_or_else(|| {
    bad_request(format!(
      "'{}' is not a valid verse reference (expected surah:ayah, e.g. 2:255)",
      req.reference
    ))
  })?;

  let conn = db::try_lock(&pool).map_err(|_| db_unavailable())?;

  if db::get_verse_by_ref(&conn, verse).map_err(internal)?.is_some() {
    return Err(conflict(format!("{verse} is already being tracked")));
  }

  let mut tracked = TrackedVerse::new(verse, Utc::now());
  tracked.id = db::insert_tracked_verse(&conn, &tracked).map_err(internal)?;
  tracing::info!("tracking {} ({})", tracked.verse, tracked.verse.surah_name());

  Ok((StatusCode::CREATED, Json(VerseResponse::from(tracked))))
}

#[derive(Serialize)]
pub struct VerseDetailResponse {
  #[serde(flatten)]
  pub verse: VerseResponse,
  pub recent_reviews: Vec<ReviewLog>,
}

/// One verse with its recent review history
pub async fn verse_detail(
  State(pool): State<DbPool>,
  Path(id): Path<i64>,
) -> Result<Json<VerseDetailResponse>, ApiError> {
  let conn = db::try_lock(&pool).map_err(|_| db_unavailable())?;
  let verse = db::get_verse_by_id(&conn, id)
    .map_err(internal)?
    .ok_or_else(|| not_found(format!("no tracked verse with id {id}")))?;
  let recent_reviews =
    db::get_reviews_for_verse(&conn, id, config::REVIEW_HISTORY_LIMIT).map_err(internal)?;

  Ok(Json(VerseDetailResponse {
    verse: VerseResponse::from(verse),
    recent_reviews,
  }))
}

/// Stop tracking a verse and drop its review history
pub async fn untrack_verse(
  State(pool): State<DbPool>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  let conn = db::try_lock(&pool).map_err(|_| db_unavailable())?;
  if db::delete_tracked(&conn, id).map_err(internal)? {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(not_found(format!("no tracked verse with id {id}")))
  }
}
