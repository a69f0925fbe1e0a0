//! The Imperial calendar of the Old World.
//!
//! Twelve months, an eight-day week, and six festival days wedged between
//! months.  Festivals sit outside the week entirely: the day after a
//! festival continues the weekday cycle as if the festival were not there.

use crate::definition::{
    CalendarDefinition, IntercalaryRule, LeapYearRule, Month, Weekday, WorldTimeInterpretation,
    YearConfig,
};
use crate::time_units::TimeUnits;

fn festival(name: &str, after_month: &str, description: &str) -> IntercalaryRule {
    IntercalaryRule {
        name: name.into(),
        after_month: after_month.into(),
        days: 1,
        leap_year_only: false,
        counts_for_weekdays: false,
        description: Some(description.into()),
    }
}

/// The Imperial calendar, epoch year 2512 IC.
pub fn old_world() -> CalendarDefinition {
    CalendarDefinition {
        name: "Imperial".into(),
        months: vec![
            Month::new("Nachexen", 32),
            Month::new("Jahrdrung", 33),
            Month::new("Pflugzeit", 33),
            Month::new("Sigmarzeit", 33),
            Month::new("Sommerzeit", 33),
            Month::new("Vorgeheim", 32),
            Month::new("Nachgeheim", 32),
            Month::new("Erntezeit", 33),
            Month::new("Brauzeit", 33),
            Month::new("Kaldezeit", 33),
            Month::new("Ulriczeit", 33),
            Month::new("Vorhexen", 33),
        ],
        weekdays: vec![
            Weekday::new("Wellentag"),
            Weekday::new("Aubentag"),
            Weekday::new("Marktag"),
            Weekday::new("Backertag"),
            Weekday::new("Bezahltag"),
            Weekday::new("Konistag"),
            Weekday::new("Angestag"),
            Weekday::new("Festag"),
        ],
        year: YearConfig {
            epoch: 2512,
            current_year: 2512,
            start_day: 0,
        },
        leap_year_rule: LeapYearRule::None,
        intercalary_days: vec![
            festival("Mitterfruhl", "Jahrdrung", "Spring equinox"),
            festival("Sonnstill", "Sommerzeit", "Summer solstice"),
            festival("Geheimnistag", "Vorgeheim", "Day of Mystery"),
            festival("Mittherbst", "Erntezeit", "Autumn equinox"),
            festival("Mondstille", "Ulriczeit", "Winter solstice"),
            festival("Hexenstag", "Vorhexen", "Witching Day, the new year"),
        ],
        time_units: TimeUnits::default(),
        world_time_interpretation: WorldTimeInterpretation::EpochBased,
    }
}
