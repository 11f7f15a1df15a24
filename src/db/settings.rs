//! Key/value settings, including the active schedule profile

use rusqlite::{Connection, OptionalExtension, Result, params};

use crate::srs::profiles::{ScheduleProfile, default_profile, get_profile};

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
  conn
    .query_row(
      "SELECT value FROM settings WHERE key = ?1",
      params![key],
      |row| row.get(0),
    )
    .optional()
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
  conn.execute(
    "INSERT INTO settings (key, value) VALUES (?1, ?2)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value",
    params![key, value],
  )?;
  Ok(())
}

/// Active schedule profile; unknown or missing values fall back to default
pub fn get_active_profile(conn: &Connection) -> &'static ScheduleProfile {
  get_setting(conn, "active_profile")
    .ok()
    .flatten()
    .and_then(|name| get_profile(&name))
    .unwrap_or_else(default_profile)
}

/// Persist the active profile name. The caller validates the name against
/// the profile table first; this only writes.
pub fn set_active_profile(conn: &Connection, name: &str) -> Result<()> {
  set_setting(conn, "active_profile", name)
}
