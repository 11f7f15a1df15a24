//! The review scheduler.
//!
//! Pure state-transition function: given a verse's current schedule state
//! and a recall quality, produce the next state. Intervals come from the
//! active profile's ladder for the first few reviews, then compound with
//! the strength factor. The caller supplies `now`; nothing here reads the
//! wall clock.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::domain::{Quality, ScheduleState};
use crate::srs::profiles::ScheduleProfile;

pub const MIN_STRENGTH_FACTOR: f64 = 1.3;
pub const MAX_STRENGTH_FACTOR: f64 = 3.0;
pub const DEFAULT_STRENGTH_FACTOR: f64 = 2.5;

const HARD_PENALTY: f64 = 0.2;
const EASY_BONUS: f64 = 0.15;

/// Reviews 1-3 use raw ladder values; from the 4th review on the ladder
/// value is multiplied by the strength factor
const GROWTH_AFTER_REVIEWS: i64 = 2;

#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
  #[error("invalid argument: {0}")]
  InvalidArgument(String),
}

/// Compute the schedule state after one completed review.
///
/// `current == None` means this is the verse's first-ever review. Passing a
/// fresh `ScheduleState` (review_count 0) is equivalent. The input is never
/// mutated; a new state is returned.
pub fn compute_next(
  current: Option<&ScheduleState>,
  quality: Quality,
  now: DateTime<Utc>,
  profile: &ScheduleProfile,
) -> Result<ScheduleState, ScheduleError> {
  let (review_count, strength_factor) = match current {
    Some(state) => {
      validate_state(state)?;
      (state.review_count, state.strength_factor)
    }
    None => (0, DEFAULT_STRENGTH_FACTOR),
  };

  let ladder = profile.ladder;
  let last_index = ladder.len() - 1;
  let base_index = (review_count as usize).min(last_index);

  let (index, strength_factor) = match quality {
    Quality::Hard => (
      base_index.saturating_sub(1),
      (strength_factor - HARD_PENALTY).max(MIN_STRENGTH_FACTOR),
    ),
    Quality::Good => (base_index, strength_factor),
    Quality::Easy => (
      (base_index + 1).min(last_index),
      (strength_factor + EASY_BONUS).min(MAX_STRENGTH_FACTOR),
    ),
  };

  let mut interval_days = ladder[index];
  if review_count > GROWTH_AFTER_REVIEWS {
    interval_days = (interval_days as f64 * strength_factor).round() as i64;
  }

  Ok(ScheduleState {
    strength_factor,
    interval_days,
    review_count: review_count + 1,
    next_due: now + Duration::days(interval_days),
    last_quality: Some(quality),
  })
}

/// Defensive boundary check on a state loaded from storage
fn validate_state(state: &ScheduleState) -> Result<(), ScheduleError> {
  if !(MIN_STRENGTH_FACTOR..=MAX_STRENGTH_FACTOR).contains(&state.strength_factor) {
    return Err(ScheduleError::InvalidArgument(format!(
      "strength factor {} outside [{}, {}]",
      state.strength_factor, MIN_STRENGTH_FACTOR, MAX_STRENGTH_FACTOR
    )));
  }
  if state.interval_days < 0 {
    return Err(ScheduleError::InvalidArgument(format!(
      "negative interval {} days",
      state.interval_days
    )));
  }
  if state.review_count < 0 {
    return Err(ScheduleError::InvalidArgument(format!(
      "negative review count {}",
      state.review_count
    )));
  }
  Ok(())
}
