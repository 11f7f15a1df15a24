//! Due-item selection.
//!
//! Given "now" and the tracked schedule states, pick the verses whose
//! review date has arrived and order them most-overdue-first. Day
//! granularity throughout: a verse due today counts as due at any hour.

use chrono::{DateTime, Utc};

use crate::domain::ScheduleState;

/// A verse that is due for review, annotated with urgency
#[derive(Debug, Clone)]
pub struct DueItem {
  pub verse_id: i64,
  pub schedule: ScheduleState,
  pub days_overdue: i64,
}

/// Select due items from `items`, sorted descending by days overdue.
///
/// Ties keep the input order (stable sort), so identical input always
/// yields identical output. Items not yet due are excluded entirely.
pub fn select_due(items: &[(i64, ScheduleState)], now: DateTime<Utc>) -> Vec<DueItem> {
  let today = now.date_naive();

  let mut due: Vec<DueItem> = items
    .iter()
    .filter(|(_, state)| state.next_due.date_naive() <= today)
    .map(|(verse_id, state)| DueItem {
      verse_id: *verse_id,
      schedule: state.clone(),
      days_overdue: (today - state.next_due.date_naive()).num_days().max(0),
    })
    .collect();

  due.sort_by(|a, b| b.days_overdue.cmp(&a.days_overdue));
  due
}
