use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::db::{self, DbPool};
use crate::domain::{Quality, ReviewLog, ScheduleState, TrackedVerse};
use crate::srs;

use super::{ApiError, bad_request, db_unavailable, internal, not_found};

#[derive(Serialize)]
pub struct DueVerse {
  pub verse_id: i64,
  pub reference: String,
  pub surah_name: &'static str,
  pub days_overdue: i64,
  pub schedule: ScheduleState,
}

#[derive(Serialize)]
pub struct DueResponse {
  pub count: usize,
  pub verses: Vec<DueVerse>,
}

/// What's due right now, most overdue first
pub async fn due_verses(State(pool): State<DbPool>) -> Result<Json<DueResponse>, ApiError> {
  let conn = db::try_lock(&pool).map_err(|_| db_unavailable())?;
  let now = Utc::now();

  let tracked = db::get_all_tracked(&conn).map_err(internal)?;
  let by_id: HashMap<i64, &TrackedVerse> = tracked.iter().map(|t| (t.id, t)).collect();

  let states: Vec<(i64, ScheduleState)> =
    tracked.iter().map(|t| (t.id, t.schedule.clone())).collect();
  let due = srs::select_due(&states, now);

  let verses = due
    .into_iter()
    .filter_map(|item| {
      let tracked = by_id.get(&item.verse_id)?;
      Some(DueVerse {
        verse_id: item.verse_id,
        reference: tracked.verse.to_string(),
        surah_name: tracked.verse.surah_name(),
        days_overdue: item.days_overdue,
        schedule: item.schedule,
      })
    })
    .collect::<Vec<_>>();

  Ok(Json(DueResponse {
    count: verses.len(),
    verses,
  }))
}

#[derive(Deserialize)]
pub struct ReviewRequest {
  pub verse_id: i64,
  pub quality: String,
}

#[derive(Serialize)]
pub struct ReviewResponse {
  pub verse_id: i64,
  pub reference: String,
  pub schedule: ScheduleState,
}

/// Complete one review: load the verse's state, run the scheduler, and
/// write the result back, all under a single database lock so concurrent
/// reviews of the same verse cannot lose an update.
pub async fn submit_review(
  State(pool): State<DbPool>,
  Json(req): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>, ApiError> {
  let quality = Quality::from_str(&req.quality).ok_or_else(|| {
    bad_request(format!(
      "unknown quality '{}' (expected hard, good or easy)",
      req.quality
    ))
  })?;

  let conn = db::try_lock(&pool).map_err(|_| db_unavailable())?;
  let now = Utc::now();

  let verse = db::get_verse_by_id(&conn, req.verse_id)
    .map_err(internal)?
    .ok_or_else(|| not_found(format!("no tracked verse with id {}", req.verse_id)))?;

  let profile = db::get_active_profile(&conn);
  let next = srs::compute_next(Some(&verse.schedule), quality, now, profile).map_err(internal)?;

  db::update_after_review(&conn, verse.id, &next).map_err(internal)?;
  let log = ReviewLog::new(verse.id, quality, next.interval_days, now);
  db::insert_review_log(&conn, &log).map_err(internal)?;

  tracing::debug!(
    "reviewed {} as {}: next due in {} days",
    verse.verse,
    quality.as_str(),
    next.interval_days
  );

  Ok(Json(ReviewResponse {
    verse_id: verse.id,
    reference: verse.verse.to_string(),
    schedule: next,
  }))
}
