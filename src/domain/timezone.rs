use std::fmt::Display;
use std::str::FromStr;

use chrono_tz::Tz;

pub const DEFAULT_REFERENCE_TZ: Tz = chrono_tz::America::New_York;

/// Zones listed next to the reference zone on the session time line. Each is
/// a fixed whole-hour offset from the reference zone, matching how the US
/// zones trail Eastern time year-round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DisplayZone {
    Eastern,
    Central,
    Mountain,
    Pacific,
}

impl DisplayZone {
    pub fn all() -> [DisplayZone; 4] {
        [
            DisplayZone::Eastern,
            DisplayZone::Central,
            DisplayZone::Mountain,
            DisplayZone::Pacific,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayZone::Eastern => "ET",
            DisplayZone::Central => "CT",
            DisplayZone::Mountain => "MT",
            DisplayZone::Pacific => "PT",
        }
    }

    /// Whole-hour offset relative to the reference zone.
    pub fn offset_hours(&self) -> i32 {
        match self {
            DisplayZone::Eastern => 0,
            DisplayZone::Central => -1,
            DisplayZone::Mountain => -2,
            DisplayZone::Pacific => -3,
        }
    }
}

impl Display for DisplayZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Resolves an IANA timezone name. Unknown names fall back to the default
/// reference zone so a typo in a funnel config can never break a page.
pub fn reference_tz(name: &str) -> Tz {
    match Tz::from_str(name) {
        Ok(tz) => tz,
        Err(..) => {
            log::warn!(
                "unknown timezone {}, falling back to {}",
                name,
                DEFAULT_REFERENCE_TZ
            );
            DEFAULT_REFERENCE_TZ
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_resolve_a_known_iana_name() {
        assert_eq!(reference_tz("America/Chicago"), chrono_tz::America::Chicago);
    }

    #[test]
    fn it_should_fall_back_to_the_default_zone_on_unknown_names() {
        assert_eq!(reference_tz("Not/AZone"), DEFAULT_REFERENCE_TZ);
        assert_eq!(reference_tz(""), DEFAULT_REFERENCE_TZ);
    }

    #[test]
    fn it_should_order_display_zones_east_to_west() {
        let offsets: Vec<i32> = DisplayZone::all()
            .iter()
            .map(DisplayZone::offset_hours)
            .collect();
        assert_eq!(offsets, vec![0, -1, -2, -3]);
        assert_eq!(DisplayZone::Eastern.to_string(), "ET");
    }
}
