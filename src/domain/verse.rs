use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::quran;
use crate::domain::schedule::ScheduleState;

/// Reference to a single ayah, e.g. 2:255 (Ayat al-Kursi)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseRef {
  pub surah: u16,
  pub ayah: u16,
}

impl VerseRef {
  /// Build a reference, validated against the surah table
  pub fn new(surah: u16, ayah: u16) -> Option<Self> {
    let meta = quran::get_surah(surah)?;
    if ayah == 0 || ayah > meta.ayah_count {
      return None;
    }
    Some(Self { surah, ayah })
  }

  /// Parse "surah:ayah" notation, e.g. "2:255"
  pub fn from_str(s: &str) -> Option<Self> {
    let (surah, ayah) = s.split_once(':')?;
    let surah = surah.trim().parse().ok()?;
    let ayah = ayah.trim().parse().ok()?;
    Self::new(surah, ayah)
  }

  pub fn surah_name(&self) -> &'static str {
    quran::get_surah(self.surah).map(|s| s.name).unwrap_or("?")
  }
}

impl fmt::Display for VerseRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.surah, self.ayah)
  }
}

/// A memorized ayah under review tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedVerse {
  pub id: i64,
  pub verse: VerseRef,
  pub schedule: ScheduleState,
  pub learned_at: DateTime<Utc>,
}

impl TrackedVerse {
  /// Start tracking a freshly memorized ayah. The schedule starts at
  /// defaults and the verse is immediately due for its first review.
  pub fn new(verse: VerseRef, now: DateTime<Utc>) -> Self {
    Self {
      id: 0,
      verse,
      schedule: ScheduleState::new(now),
      learned_at: now,
    }
  }
}
