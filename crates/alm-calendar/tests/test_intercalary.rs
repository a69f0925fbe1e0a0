//! Intercalary-block behaviour: segment walking, weekday skipping,
//! leap-only blocks, and multi-day blocks.

use alm_calendar::calendars::old_world;
use alm_calendar::{
    CalendarDate, CalendarDefinition, IntercalaryRule, LeapYearRule, Month, TimeUnits, Weekday,
    WorldTimeInterpretation, YearConfig,
};

fn date(y: i64, m: u32, d: u32) -> CalendarDate {
    CalendarDate::new(y, m, d)
}

/// Three months of 30/33/33 days, a four-day week, and the one-day
/// Mitterfruhl festival after the second month, outside the weekday cycle.
fn festival_calendar() -> CalendarDefinition {
    CalendarDefinition {
        name: "Festival".into(),
        months: vec![
            Month::new("Thaw", 30),
            Month::new("Sowing", 33),
            Month::new("Harvest", 33),
        ],
        weekdays: vec![
            Weekday::new("Firstday"),
            Weekday::new("Middleday"),
            Weekday::new("Lastday"),
            Weekday::new("Restday"),
        ],
        year: YearConfig {
            epoch: 1000,
            current_year: 1000,
            start_day: 0,
        },
        leap_year_rule: LeapYearRule::None,
        intercalary_days: vec![IntercalaryRule {
            name: "Mitterfruhl".into(),
            after_month: "Sowing".into(),
            days: 1,
            leap_year_only: false,
            counts_for_weekdays: false,
            description: None,
        }],
        time_units: TimeUnits::default(),
        world_time_interpretation: WorldTimeInterpretation::EpochBased,
    }
}

// ─── Block navigation ─────────────────────────────────────────────────────────

#[test]
fn stepping_into_and_over_the_block() {
    let cal = festival_calendar();
    let last_of_sowing = date(1000, 2, 33);
    assert_eq!(
        cal.add_days(&last_of_sowing, 1).unwrap(),
        CalendarDate::intercalary(1000, 2, "Mitterfruhl", 1)
    );
    assert_eq!(cal.add_days(&last_of_sowing, 2).unwrap(), date(1000, 3, 1));
    // And back again
    let festival = CalendarDate::intercalary(1000, 2, "Mitterfruhl", 1);
    assert_eq!(cal.add_days(&festival, -1).unwrap(), last_of_sowing);
    assert_eq!(cal.add_days(&festival, 1).unwrap(), date(1000, 3, 1));
}

#[test]
fn weekday_skips_the_block() {
    let cal = festival_calendar();
    let before = cal.weekday_of(&date(1000, 2, 33)).unwrap();
    let after = cal.weekday_of(&date(1000, 3, 1)).unwrap();
    assert_eq!(after, (before + 1) % 4);
}

#[test]
fn block_roundtrips() {
    let cal = festival_calendar();
    let festival = CalendarDate::intercalary(1000, 2, "Mitterfruhl", 1);
    let dc = cal.date_to_day_count(&festival).unwrap();
    assert_eq!(dc, 63);
    assert_eq!(cal.day_count_to_date(dc), festival);
}

#[test]
fn unknown_block_is_rejected() {
    let cal = festival_calendar();
    let bogus = CalendarDate::intercalary(1000, 1, "Mitterfruhl", 1);
    assert!(cal.date_to_day_count(&bogus).is_err());
    let bogus = CalendarDate::intercalary(1000, 2, "Sommerfest", 1);
    assert!(cal.date_to_day_count(&bogus).is_err());
}

// ─── Multi-day blocks ─────────────────────────────────────────────────────────

#[test]
fn multi_day_block_is_navigable_day_by_day() {
    let mut cal = festival_calendar();
    cal.intercalary_days[0].days = 3;
    assert!(cal.validate().is_ok());

    let mut cursor = date(1000, 2, 33);
    for day in 1..=3 {
        cursor = cal.add_days(&cursor, 1).unwrap();
        assert_eq!(
            cursor,
            CalendarDate::intercalary(1000, 2, "Mitterfruhl", day)
        );
    }
    assert_eq!(cal.add_days(&cursor, 1).unwrap(), date(1000, 3, 1));
    assert_eq!(cal.year_length(1000), 30 + 33 + 33 + 3);
}

#[test]
fn weekday_skip_is_independent_of_block_length() {
    let mut cal = festival_calendar();
    cal.intercalary_days[0].days = 3;
    let before = cal.weekday_of(&date(1000, 2, 33)).unwrap();
    let after = cal.weekday_of(&date(1000, 3, 1)).unwrap();
    assert_eq!(after, (before + 1) % 4);
}

#[test]
fn counting_block_advances_the_weekday() {
    let mut cal = festival_calendar();
    cal.intercalary_days[0].counts_for_weekdays = true;
    cal.intercalary_days[0].days = 2;
    let before = cal.weekday_of(&date(1000, 2, 33)).unwrap();
    let after = cal.weekday_of(&date(1000, 3, 1)).unwrap();
    assert_eq!(after, (before + 3) % 4);
}

// ─── Leap-only blocks ─────────────────────────────────────────────────────────

#[test]
fn leap_only_block_occurs_every_fourth_year() {
    let mut cal = festival_calendar();
    cal.leap_year_rule = LeapYearRule::Custom {
        interval: 4,
        target_month: "Thaw".into(),
        extra_days: 1,
    };
    cal.intercalary_days.push(IntercalaryRule {
        name: "Kingsday".into(),
        after_month: "Harvest".into(),
        days: 1,
        leap_year_only: true,
        counts_for_weekdays: true,
        description: None,
    });
    assert!(cal.validate().is_ok());

    // 1000 is a leap year (divisible by 4), 1001 is not.
    assert_eq!(cal.year_length(1000), 30 + 1 + 33 + 33 + 1 + 1);
    assert_eq!(cal.year_length(1001), 30 + 33 + 33 + 1);
    assert_eq!(cal.intercalary_days_in(1000).len(), 2);
    assert_eq!(cal.intercalary_days_in(1001).len(), 1);

    let kingsday = CalendarDate::intercalary(1000, 3, "Kingsday", 1);
    let dc = cal.date_to_day_count(&kingsday).unwrap();
    assert_eq!(cal.day_count_to_date(dc), kingsday);

    // The same date in a non-leap year is invalid
    let missing = CalendarDate::intercalary(1001, 3, "Kingsday", 1);
    assert!(cal.date_to_day_count(&missing).is_err());

    // The last day of a non-leap year steps straight into the next year
    let last = date(1001, 3, 33);
    assert_eq!(cal.add_days(&last, 1).unwrap(), date(1002, 1, 1));
}

#[test]
fn add_years_from_a_leap_only_block_falls_back() {
    let mut cal = festival_calendar();
    cal.leap_year_rule = LeapYearRule::Custom {
        interval: 4,
        target_month: "Thaw".into(),
        extra_days: 1,
    };
    cal.intercalary_days.push(IntercalaryRule {
        name: "Kingsday".into(),
        after_month: "Harvest".into(),
        days: 1,
        leap_year_only: true,
        counts_for_weekdays: true,
        description: None,
    });
    let kingsday = CalendarDate::intercalary(1000, 3, "Kingsday", 1);
    assert_eq!(
        cal.add_years(&kingsday, 4).unwrap(),
        CalendarDate::intercalary(1004, 3, "Kingsday", 1)
    );
    assert_eq!(cal.add_years(&kingsday, 1).unwrap(), date(1001, 3, 33));
}

// ─── Several blocks after one month ───────────────────────────────────────────

#[test]
fn blocks_after_the_same_month_walk_in_declaration_order() {
    let mut cal = festival_calendar();
    cal.intercalary_days.push(IntercalaryRule {
        name: "Aftermath".into(),
        after_month: "Sowing".into(),
        days: 2,
        leap_year_only: false,
        counts_for_weekdays: true,
        description: None,
    });
    assert!(cal.validate().is_ok());

    let mut cursor = date(1000, 2, 33);
    let expected = [
        CalendarDate::intercalary(1000, 2, "Mitterfruhl", 1),
        CalendarDate::intercalary(1000, 2, "Aftermath", 1),
        CalendarDate::intercalary(1000, 2, "Aftermath", 2),
        date(1000, 3, 1),
    ];
    for want in expected {
        cursor = cal.add_days(&cursor, 1).unwrap();
        assert_eq!(cursor, want);
    }
}

// ─── The Imperial preset ──────────────────────────────────────────────────────

#[test]
fn imperial_festival_walk() {
    let cal = old_world();
    // Jahrdrung 33 → Mitterfruhl → Pflugzeit 1, with the weekday carrying
    // straight across the festival.
    let last = date(2512, 2, 33);
    let festival = cal.add_days(&last, 1).unwrap();
    assert_eq!(
        festival,
        CalendarDate::intercalary(2512, 2, "Mitterfruhl", 1)
    );
    let next = cal.add_days(&last, 2).unwrap();
    assert_eq!(next, date(2512, 3, 1));
    let before = cal.weekday_of(&last).unwrap();
    assert_eq!(next.weekday, (before + 1) % 8);
}

#[test]
fn imperial_full_year_roundtrip() {
    let cal = old_world();
    for dc in 0..cal.year_length(2512) {
        let d = cal.day_count_to_date(dc);
        assert_eq!(cal.date_to_day_count(&d).unwrap(), dc, "failed at {dc}");
    }
}
