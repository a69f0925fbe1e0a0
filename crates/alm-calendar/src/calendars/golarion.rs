//! The Golarion calendar (Absalom Reckoning).

use crate::definition::{
    CalendarDefinition, LeapYearRule, Month, Weekday, WorldTimeInterpretation, YearConfig,
};
use crate::time_units::TimeUnits;

fn month(name: &str, days: u32) -> Month {
    Month::new(name, days)
}

/// The Golarion calendar: epoch 2700 AR, current year 4725 AR, a leap day
/// in Calistril every eighth year.
///
/// World time is interpreted real-time-based — second 0 is the first
/// instant of the *current* year, matching game systems that track world
/// time as seconds elapsed from "now".
pub fn golarion() -> CalendarDefinition {
    CalendarDefinition {
        name: "Golarion".into(),
        months: vec![
            month("Abadius", 31),
            month("Calistril", 28),
            month("Pharast", 31),
            month("Gozran", 30),
            month("Desnus", 31),
            month("Sarenith", 30),
            month("Erastus", 31),
            month("Arodus", 31),
            month("Rova", 30),
            month("Lamashan", 31),
            month("Neth", 30),
            month("Kuthona", 31),
        ],
        weekdays: vec![
            Weekday::new("Moonday"),
            Weekday::new("Toilday"),
            Weekday::new("Wealday"),
            Weekday::new("Oathday"),
            Weekday::new("Fireday"),
            Weekday::new("Starday"),
            Weekday::new("Sunday"),
        ],
        year: YearConfig {
            epoch: 2700,
            current_year: 4725,
            start_day: 0,
        },
        leap_year_rule: LeapYearRule::Custom {
            interval: 8,
            target_month: "Calistril".into(),
            extra_days: 1,
        },
        intercalary_days: vec![],
        time_units: TimeUnits::default(),
        world_time_interpretation: WorldTimeInterpretation::RealTimeBased,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::CalendarDate;

    #[test]
    fn validates() {
        assert!(golarion().validate().is_ok());
    }

    #[test]
    fn world_time_zero_is_current_year() {
        let cal = golarion();
        let date = cal.world_time_to_date(0.0);
        assert_eq!(date.date_only(), CalendarDate::new(4725, 1, 1));
    }

    #[test]
    fn leap_cycle() {
        let cal = golarion();
        assert!(cal.is_leap_year(4720));
        assert!(!cal.is_leap_year(4725));
        assert_eq!(cal.year_length(4720), 366);
        assert_eq!(cal.year_length(4725), 365);
    }
}
