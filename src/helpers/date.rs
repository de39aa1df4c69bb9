use chrono::{DateTime, Utc};

/// Whole-unit components of the span until a target instant, for the
/// server-rendered countdown frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// None once the target has been reached or passed.
pub fn time_left(target: DateTime<Utc>, now: DateTime<Utc>) -> Option<TimeLeft> {
    let diff = target.signed_duration_since(now).num_seconds();
    if diff <= 0 {
        return None;
    }

    Some(TimeLeft {
        days: diff / 86_400,
        hours: diff / 3_600 % 24,
        minutes: diff / 60 % 60,
        seconds: diff % 60,
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn it_should_split_the_remaining_span_into_units() {
        let now = Utc.with_ymd_and_hms(2026, 3, 16, 0, 0, 0).unwrap();
        let target = Utc.with_ymd_and_hms(2026, 3, 18, 5, 30, 12).unwrap();

        assert_eq!(
            time_left(target, now),
            Some(TimeLeft {
                days: 2,
                hours: 5,
                minutes: 30,
                seconds: 12,
            })
        );
    }

    #[test]
    fn it_should_return_none_once_the_target_passed() {
        let now = Utc.with_ymd_and_hms(2026, 3, 16, 20, 0, 0).unwrap();

        assert_eq!(time_left(now, now), None);
        assert_eq!(time_left(now - chrono::Duration::seconds(1), now), None);
    }
}
