use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::db::{self, DbPool};
use crate::srs::profiles::{PROFILES, ScheduleProfile, get_profile};

use super::{ApiError, bad_request, db_unavailable, internal};

#[derive(Serialize)]
pub struct SettingsResponse {
  pub active_profile: &'static str,
  pub profiles: &'static [ScheduleProfile],
}

pub async fn show_settings(State(pool): State<DbPool>) -> Result<Json<SettingsResponse>, ApiError> {
  let conn = db::try_lock(&pool).map_err(|_| db_unavailable())?;
  Ok(Json(SettingsResponse {
    active_profile: db::get_active_profile(&conn).name,
    profiles: &PROFILES,
  }))
}

#[derive(Deserialize)]
pub struct SettingsRequest {
  pub active_profile: String,
}

/// Switch the schedule profile. Already-scheduled reviews keep their dates;
/// the new ladder applies from the next review onward.
pub async fn update_settings(
  State(pool): State<DbPool>,
  Json(req): Json<SettingsRequest>,
) -> Result<Json<SettingsResponse>, ApiError> {
  let profile = get_profile(&req.active_profile)
    .ok_or_else(|| bad_request(format!("unknown profile '{}'", req.active_profile)))?;

  let conn = db::try_lock(&pool).map_err(|_| db_unavailable())?;
  db::set_active_profile(&conn, profile.name).map_err(internal)?;
  tracing::info!("schedule profile set to {}", profile.name);

  Ok(Json(SettingsResponse {
    active_profile: profile.name,
    profiles: &PROFILES,
  }))
}
