use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::schedule::Quality;

/// One completed review of a tracked verse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewLog {
  pub id: i64,
  pub verse_id: i64,
  pub quality: Quality,
  pub reviewed_at: DateTime<Utc>,
  /// Interval granted by this review, in days
  pub interval_days: i64,
}

impl ReviewLog {
  pub fn new(verse_id: i64, quality: Quality, interval_days: i64, now: DateTime<Utc>) -> Self {
    Self {
      id: 0,
      verse_id,
      quality,
      reviewed_at: now,
      interval_days,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_review_log_new() {
    let now = Utc::now();
    let log = ReviewLog::new(42, Quality::Good, 3, now);
    assert_eq!(log.id, 0);
    assert_eq!(log.verse_id, 42);
    assert_eq!(log.quality, Quality::Good);
    assert_eq!(log.reviewed_at, now);
    assert_eq!(log.interval_days, 3);
  }
}
