//! Named schedule profiles.
//!
//! A profile is a fixed ladder of day intervals indexed by review count.
//! The scheduling algorithm is identical across profiles; only the ladder
//! differs. The active profile is a per-database setting.

use serde::Serialize;

/// A named interval ladder
#[derive(Debug, Serialize)]
pub struct ScheduleProfile {
  pub name: &'static str,
  /// Day intervals, all >= 1, in ascending order
  pub ladder: &'static [i64],
}

pub const PROFILES: [ScheduleProfile; 3] = [
  ScheduleProfile {
    name: "default",
    ladder: &[3, 7, 15, 30, 60, 120, 240],
  },
  ScheduleProfile {
    name: "intensive",
    ladder: &[1, 3, 7, 14, 30, 60, 120],
  },
  ScheduleProfile {
    name: "relaxed",
    ladder: &[7, 15, 30, 60, 120, 240, 365],
  },
];

/// Look up a profile by name
pub fn get_profile(name: &str) -> Option<&'static ScheduleProfile> {
  PROFILES.iter().find(|p| p.name == name)
}

pub fn default_profile() -> &'static ScheduleProfile {
  &PROFILES[0]
}
