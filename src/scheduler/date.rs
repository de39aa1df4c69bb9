use chrono::{DateTime, Datelike, Duration, Timelike, Utc};

use super::entities::{ResolvedSession, WeeklySchedule};
use super::helpers;

pub trait DateUtils: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
    fn clone(&self) -> Box<dyn DateUtils>;
}

pub struct ChronoUtils();

impl DateUtils for ChronoUtils {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn clone(&self) -> Box<dyn DateUtils> {
        Box::new(Self {})
    }
}

/// Finds the next upcoming session of a weekly schedule. All reasoning
/// happens in the schedule's reference timezone: the current instant is
/// projected to reference-zone wall-clock time, compared against today's
/// slot, and the chosen civil date is resolved back to an instant with the
/// offset in force on that date.
pub struct SessionFinder {
    schedule: WeeklySchedule,
    utils: Box<dyn DateUtils>,
}

impl SessionFinder {
    pub fn new(schedule: WeeklySchedule) -> Self {
        Self::new_finder(schedule, Box::new(ChronoUtils()))
    }

    fn new_finder(schedule: WeeklySchedule, utils: Box<dyn DateUtils>) -> Self {
        Self { schedule, utils }
    }

    pub fn clone(&self) -> Self {
        Self {
            schedule: self.schedule.clone(),
            utils: self.utils.clone(),
        }
    }

    /// Next session that has not started yet, relative to the injected clock.
    pub fn next_session(&self) -> ResolvedSession {
        self.next_session_at(self.utils.now())
    }

    /// Next session that has not started yet, relative to `now`. A session
    /// whose start equals the current reference-zone wall-clock time counts
    /// as already started and rolls over to the following weekday.
    pub fn next_session_at(&self, now: DateTime<Utc>) -> ResolvedSession {
        let tz = self.schedule.tz();
        let local_now = now.with_timezone(&tz);

        let mut weekday = local_now.weekday();
        let mut slot = self.schedule.slot(weekday);
        let mut target_date = local_now.date_naive();

        let now_minutes = local_now.hour() * 60 + local_now.minute();
        if now_minutes >= slot.minute_of_day() {
            weekday = weekday.succ();
            slot = self.schedule.slot(weekday);
            target_date = target_date + Duration::days(1);
        }

        let starts_at = helpers::civil_to_instant(tz, target_date, slot.hour, slot.minute);

        ResolvedSession {
            starts_at: starts_at.with_timezone(&Utc),
            weekday,
            session_id: slot.session_id.clone(),
            display_date: helpers::format_display_date(&starts_at),
            display_time: helpers::format_display_time(slot.hour, slot.minute),
        }
    }

    pub fn next_session_rfc3339(&self) -> String {
        self.next_session_rfc3339_at(self.utils.now())
    }

    /// Start of the next session as an RFC 3339 timestamp carrying the
    /// reference-zone offset, for callers that only need a serializable
    /// target rather than the full session.
    pub fn next_session_rfc3339_at(&self, now: DateTime<Utc>) -> String {
        self.next_session_at(now)
            .starts_at
            .with_timezone(&self.schedule.tz())
            .to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Weekday};
    use chrono_tz::America::New_York;

    use super::*;

    fn finder() -> SessionFinder {
        SessionFinder::new(WeeklySchedule::default())
    }

    fn eastern(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> DateTime<Utc> {
        New_York
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn it_should_return_todays_slot_before_its_start_time() {
        // Monday 2026-03-16, 19:00 ET.
        let session = finder().next_session_at(eastern(2026, 3, 16, 19, 0));

        assert_eq!(session.weekday, Weekday::Mon);
        assert_eq!(session.session_id, "70644");
        assert_eq!(session.starts_at, eastern(2026, 3, 16, 20, 0));
        assert_eq!(session.display_date, "Monday, March 16th, 2026");
        assert_eq!(
            session.display_time,
            "8:00 PM ET | 7:00 PM CT | 6:00 PM MT | 5:00 PM PT"
        );
    }

    #[test]
    fn it_should_roll_to_tomorrow_once_todays_session_started() {
        // Monday 20:01 ET, one minute after the Monday slot.
        let session = finder().next_session_at(eastern(2026, 3, 16, 20, 1));

        assert_eq!(session.weekday, Weekday::Tue);
        assert_eq!(session.session_id, "70645");
        assert_eq!(session.starts_at, eastern(2026, 3, 17, 20, 0));
    }

    #[test]
    fn it_should_roll_forward_on_the_exact_start_boundary() {
        let now = eastern(2026, 3, 16, 20, 0);
        let session = finder().next_session_at(now);

        assert_eq!(session.weekday, Weekday::Tue);
        assert!(session.starts_at > now);
    }

    #[test]
    fn it_should_wrap_saturday_over_to_sunday() {
        // Saturday 15:00 ET, after the 14:00 Saturday slot.
        let session = finder().next_session_at(eastern(2026, 3, 21, 15, 0));

        assert_eq!(session.weekday, Weekday::Sun);
        assert_eq!(session.session_id, "70650");
        assert_eq!(session.starts_at, eastern(2026, 3, 22, 14, 0));
    }

    #[test]
    fn it_should_use_the_post_transition_offset_on_spring_forward_day() {
        // 2026-03-08 01:00 EST (06:00 UTC); clocks jump to EDT at 02:00.
        // Sunday's 14:00 slot lands after the transition: 14:00 EDT = 18:00 UTC,
        // not the 19:00 UTC a stale EST offset would produce.
        let now = Utc.with_ymd_and_hms(2026, 3, 8, 6, 0, 0).unwrap();
        let session = finder().next_session_at(now);

        assert_eq!(session.weekday, Weekday::Sun);
        assert_eq!(
            session.starts_at,
            Utc.with_ymd_and_hms(2026, 3, 8, 18, 0, 0).unwrap()
        );
    }

    #[test]
    fn it_should_use_the_standard_offset_after_fall_back() {
        // 2026-11-01 00:30 EDT (04:30 UTC); clocks fall back at 02:00.
        // Sunday's 14:00 slot resolves under EST: 14:00 EST = 19:00 UTC.
        let now = Utc.with_ymd_and_hms(2026, 11, 1, 4, 30, 0).unwrap();
        let session = finder().next_session_at(now);

        assert_eq!(session.weekday, Weekday::Sun);
        assert_eq!(
            session.starts_at,
            Utc.with_ymd_and_hms(2026, 11, 1, 19, 0, 0).unwrap()
        );
    }

    #[test]
    fn it_should_return_identical_results_for_the_same_instant() {
        let finder = finder();
        let now = eastern(2026, 7, 3, 9, 41);
        let first = finder.next_session_at(now);
        let second = finder.clone().next_session_at(now);

        assert_eq!(first, second);
    }

    #[test]
    fn it_should_always_return_a_strictly_future_session_within_a_week() {
        let finder = finder();
        let base = Utc.with_ymd_and_hms(2026, 2, 20, 0, 0, 0).unwrap();

        // Sweep five weeks in uneven steps so every weekday and hour is hit.
        for step in 0..120 {
            let now = base + Duration::hours(step * 7) + Duration::minutes(step * 13 % 60);
            let session = finder.next_session_at(now);

            assert!(session.starts_at > now);
            assert!(session.starts_at - now <= Duration::days(7));
        }
    }

    #[test]
    fn it_should_match_the_reference_zone_weekday_of_the_resolved_instant() {
        let session = finder().next_session_at(eastern(2026, 3, 16, 19, 0));
        let civil = session.starts_at.with_timezone(&New_York);

        assert_eq!(civil.weekday(), session.weekday);
        assert_eq!(
            session.session_id,
            WeeklySchedule::default().slot(civil.weekday()).session_id
        );
    }

    #[test]
    fn it_should_render_the_start_as_rfc3339_with_the_zone_offset() {
        let text = finder().next_session_rfc3339_at(eastern(2026, 3, 16, 19, 0));

        assert_eq!(text, "2026-03-16T20:00:00-04:00");
        assert_eq!(
            DateTime::parse_from_rfc3339(&text).unwrap(),
            eastern(2026, 3, 16, 20, 0)
        );
    }

    #[test]
    fn it_should_read_the_injected_clock_when_no_instant_is_given() {
        let finder = SessionFinder::new_finder(
            WeeklySchedule::default(),
            Box::new(MockDateUtils {
                now_date: eastern(2026, 3, 16, 20, 1),
            }),
        );

        let session = finder.next_session();
        assert_eq!(session.session_id, "70645");
    }

    struct MockDateUtils {
        now_date: DateTime<Utc>,
    }

    impl DateUtils for MockDateUtils {
        fn now(&self) -> DateTime<Utc> {
            self.now_date
        }

        fn clone(&self) -> Box<dyn DateUtils> {
            Box::new(Self {
                now_date: self.now_date,
            })
        }
    }
}
