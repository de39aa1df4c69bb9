use chrono::{DateTime, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::domain::timezone;

/// One weekday's fixed start time and the session identifier the webinar
/// platform expects for that day. Times are wall-clock in the schedule's
/// reference timezone.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct WeeklySlot {
    pub hour: u32,
    pub minute: u32,
    pub session_id: String,
}

impl WeeklySlot {
    pub fn new(hour: u32, minute: u32, session_id: &str) -> Self {
        Self {
            hour,
            minute,
            session_id: session_id.to_string(),
        }
    }

    /// Minute-of-day, for wall-clock comparisons.
    pub fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

/// Exactly one slot per civil weekday, indexed 0=Sunday..6=Saturday.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct WeeklySchedule {
    pub timezone: String,
    pub slots: [WeeklySlot; 7],
}

impl WeeklySchedule {
    pub fn slot(&self, weekday: Weekday) -> &WeeklySlot {
        &self.slots[weekday.num_days_from_sunday() as usize]
    }

    pub fn tz(&self) -> Tz {
        timezone::reference_tz(&self.timezone)
    }
}

impl Default for WeeklySchedule {
    /// The Eastern-time table: evening sessions on weekdays, afternoon
    /// sessions on the weekend.
    fn default() -> Self {
        Self {
            timezone: String::from("America/New_York"),
            slots: [
                WeeklySlot::new(14, 0, "70650"),
                WeeklySlot::new(20, 0, "70644"),
                WeeklySlot::new(20, 0, "70645"),
                WeeklySlot::new(20, 0, "70646"),
                WeeklySlot::new(20, 0, "70647"),
                WeeklySlot::new(20, 0, "70648"),
                WeeklySlot::new(14, 0, "70649"),
            ],
        }
    }
}

/// The next upcoming session, derived fresh from an instant. Holds no
/// identity beyond its fields; recomputing from the same instant yields
/// the same value.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSession {
    pub starts_at: DateTime<Utc>,
    pub weekday: Weekday,
    pub session_id: String,
    pub display_date: String,
    pub display_time: String,
}
