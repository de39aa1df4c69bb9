use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, TimeZone};
use chrono_tz::Tz;
use itertools::Itertools;

use crate::domain::timezone::DisplayZone;

/// English ordinal suffix: 23 -> "23rd", 1 -> "1st", 11 -> "11th".
pub fn ordinal(day: u32) -> String {
    if day % 100 >= 11 && day % 100 <= 13 {
        return format!("{}th", day);
    }
    let suffix = match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{}{}", day, suffix)
}

/// "Thursday, March 19th, 2026"
pub fn format_display_date(date: &DateTime<Tz>) -> String {
    format!(
        "{}, {} {}, {}",
        date.format("%A"),
        date.format("%B"),
        ordinal(date.day()),
        date.year()
    )
}

/// Multi-zone time line from a wall-clock time in the reference zone,
/// e.g. "8:00 PM ET | 7:00 PM CT | 6:00 PM MT | 5:00 PM PT".
pub fn format_display_time(hour: u32, minute: u32) -> String {
    DisplayZone::all()
        .iter()
        .map(|zone| {
            let shifted = (hour as i32 + zone.offset_hours() + 24) % 24;
            let meridiem = if shifted >= 12 { "PM" } else { "AM" };
            let clock_hour = match shifted % 12 {
                0 => 12,
                h => h,
            };
            format!("{}:{:02} {} {}", clock_hour, minute, meridiem, zone.label())
        })
        .join(" | ")
}

/// Resolves a civil date and time-of-day in `tz` to the instant it names,
/// using the zone offset in force at that moment rather than the offset of
/// any other day. Total: wall-clock times repeated by a backward transition
/// resolve to their first pass, and times skipped by a forward transition
/// resolve to the first instant after the gap.
pub fn civil_to_instant(tz: Tz, date: NaiveDate, hour: u32, minute: u32) -> DateTime<Tz> {
    let naive = date
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_else(|| date.and_hms_opt(0, 0, 0).unwrap());

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let mut probe = naive;
            for _ in 0..48 {
                probe = probe + Duration::minutes(30);
                if let Some(instant) = tz.from_local_datetime(&probe).earliest() {
                    return instant;
                }
            }
            log::warn!(
                "could not place {} within {}, treating the wall-clock value as UTC",
                naive,
                tz
            );
            tz.from_utc_datetime(&naive)
        }
    }
}
