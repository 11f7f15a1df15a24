use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Self-reported recall quality, collected after each review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
  Hard,
  Good,
  Easy,
}

impl Quality {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Hard => "hard",
      Self::Good => "good",
      Self::Easy => "easy",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "hard" => Some(Self::Hard),
      "good" => Some(Self::Good),
      "easy" => Some(Self::Easy),
      _ => None,
    }
  }
}

/// Persisted scheduling facts for one tracked verse.
///
/// Only the scheduler mutates this (by producing a fresh value); storage
/// just round-trips it. `next_due` is always derived from the update time
/// plus `interval_days`, never adjusted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleState {
  pub strength_factor: f64,
  pub interval_days: i64,
  pub review_count: i64,
  pub next_due: DateTime<Utc>,
  pub last_quality: Option<Quality>,
}

impl ScheduleState {
  /// Initial state for a verse just marked as memorized
  pub fn new(now: DateTime<Utc>) -> Self {
    Self {
      strength_factor: 2.5,
      interval_days: 0,
      review_count: 0,
      next_due: now,
      last_quality: None,
    }
  }
}
