pub mod quran;
pub mod review;
pub mod schedule;
pub mod verse;

pub use quran::{Surah, get_surah};
pub use review::ReviewLog;
pub use schedule::{Quality, ScheduleState};
pub use verse::{TrackedVerse, VerseRef};
