use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;

use crate::db::{self, DbPool, LogOnError, SurahProgress};
use crate::domain::quran;

use super::{ApiError, db_unavailable, internal};

#[derive(Serialize)]
pub struct StatsResponse {
  pub total_tracked: i64,
  pub total_ayahs: i64,
  pub due_count: i64,
  pub reviews_today: i64,
  pub streak_days: i64,
  pub average_strength: Option<f64>,
  pub surahs: Vec<SurahProgress>,
}

pub async fn stats(State(pool): State<DbPool>) -> Result<Json<StatsResponse>, ApiError> {
  let conn = db::try_lock(&pool).map_err(|_| db_unavailable())?;
  let now = Utc::now();

  Ok(Json(StatsResponse {
    total_tracked: db::get_total_tracked(&conn).map_err(internal)?,
    total_ayahs: quran::total_ayah_count(),
    due_count: db::get_due_count(&conn, now).map_err(internal)?,
    reviews_today: db::count_reviews_on(&conn, now).log_warn_default("count reviews today"),
    streak_days: db::get_review_streak(&conn, now.date_naive()).log_warn_default("review streak"),
    average_strength: db::get_average_strength(&conn).log_warn_default("average strength"),
    surahs: db::get_surah_progress(&conn).map_err(internal)?,
  }))
}
