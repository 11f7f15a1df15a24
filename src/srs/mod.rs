pub mod due;
pub mod profiles;
pub mod scheduler;

pub use due::{DueItem, select_due};
pub use profiles::{ScheduleProfile, default_profile, get_profile};
pub use scheduler::{ScheduleError, compute_next};
