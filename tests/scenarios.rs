use calendar_date::{days_in_month, is_leap_year, CalendarDate};

fn date(year: i32, month: i32, day: i32) -> CalendarDate {
    CalendarDate::new(year, month, day)
}

/// Every valid day from `start`, stepping one day at a time.
fn every_day_from(start: CalendarDate, count: usize) -> Vec<CalendarDate> {
    let mut days = Vec::with_capacity(count);
    let mut current = start;
    for _ in 0..count {
        days.push(current);
        current = current.add_days(1);
    }
    days
}

#[test]
fn add_seven_months_to_leap_day() {
    let result = date(2000, 2, 29).add_months(7);
    assert_eq!(result, date(2000, 9, 29));
    assert!(result.is_valid());
}

#[test]
fn add_forty_months_to_leap_day() {
    let result = date(2000, 2, 29).add_months(40);
    assert_eq!(result, date(2003, 6, 29));
    assert!(result.is_valid());
}

#[test]
fn add_month_clamps_to_end_of_february() {
    let result = date(2015, 1, 31).add_months(1);
    assert_eq!(result, date(2015, 2, 28));
    assert!(result.is_valid());
}

#[test]
fn add_fifteen_hundred_days() {
    let result = date(2000, 10, 5).add_days(1500);
    assert_eq!(result, date(2004, 11, 13));
    assert!(result.is_valid());
}

#[test]
fn subtract_eighteen_months_clamps() {
    let result = date(2015, 5, 31).subtract_months(18);
    assert_eq!(result, date(2013, 11, 30));
    assert!(result.is_valid());
}

#[test]
fn subtract_hundred_twenty_days() {
    let result = date(2000, 3, 20).subtract_days(120);
    assert_eq!(result, date(1999, 11, 21));
    assert!(result.is_valid());
}

#[test]
fn invalid_dates() {
    assert!(!date(2015, 13, 3).is_valid());
    assert!(!date(2003, 2, 29).is_valid());
    assert!(!date(1, 6, 31).is_valid());
    assert!(!date(0, 6, 30).is_valid());
}

#[test]
fn text_form_is_zero_padded() {
    assert_eq!(date(2005, 4, 10).to_string(), "2005-04-10");
}

#[test]
fn leap_year_boundaries() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2004));
    assert!(!is_leap_year(2003));

    assert_eq!(days_in_month(2000, 2), Some(29));
    assert_eq!(days_in_month(1900, 2), Some(28));
    assert_eq!(days_in_month(2004, 2), Some(29));
    assert_eq!(days_in_month(2003, 2), Some(28));
}

#[test]
fn text_roundtrip_over_four_years() {
    for d in every_day_from(date(1999, 1, 1), 1461) {
        assert!(d.is_valid(), "walk produced invalid date {d}");
        assert_eq!(CalendarDate::parse(&d.to_string()), d, "text roundtrip failed for {d}");
    }
}

#[test]
fn text_roundtrip_for_early_and_negative_years() {
    for d in [date(1, 1, 1), date(983, 12, 31), date(-1, 6, 15), date(-4713, 11, 24)] {
        assert!(d.equals(d.to_string()), "text roundtrip failed for {d}");
    }
}

#[test]
fn julian_roundtrip_over_leap_cycle_boundaries() {
    for start in [date(1582, 10, 15), date(1899, 12, 1), date(1999, 12, 1), date(2099, 12, 1)] {
        for d in every_day_from(start, 500) {
            let jd = d.to_julian_day();
            assert_eq!(jd.get().fract(), 0.0, "fractional day number for {d}");
            assert_eq!(CalendarDate::from_julian_day(jd), d, "julian roundtrip failed for {d}");
        }
    }
}

#[test]
fn julian_days_are_consecutive() {
    let days = every_day_from(date(1999, 12, 25), 400);
    for pair in days.windows(2) {
        assert_eq!(
            pair[1].to_julian_day().get() - pair[0].to_julian_day().get(),
            1.0,
            "gap between {} and {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn day_walk_matches_subtraction() {
    let start = date(2012, 2, 29);
    for n in [1, 28, 29, 30, 31, 365, 366, 1000, 1461] {
        assert_eq!(start.add_days(n).subtract_days(n), start, "round trip of {n} days");
        assert_eq!(
            start.add_days(n).to_julian_day().get() - start.to_julian_day().get(),
            f64::from(n),
            "{n} days forward"
        );
    }
}

#[test]
fn exactly_one_ordering_holds() {
    let samples = [
        date(1999, 12, 31),
        date(2000, 1, 1),
        date(2000, 1, 2),
        date(2000, 2, 1),
        date(2000, 13, 1),
        date(0, 6, 30),
        CalendarDate::parse("2000-xx-01"),
        CalendarDate::parse("garbage"),
    ];

    for a in &samples {
        for b in &samples {
            let outcomes = [a.is_before(*b), a.equals(*b), a.is_after(*b)];
            assert_eq!(
                outcomes.iter().filter(|&&held| held).count(),
                1,
                "ordering of {a} and {b}"
            );
        }
    }
}

#[test]
fn chrono_agrees_on_weekdays_and_ordinals() {
    use chrono::{Datelike, NaiveDate};

    for d in every_day_from(date(2023, 12, 1), 500) {
        let naive = NaiveDate::try_from(d).unwrap();
        assert_eq!(d.day_of_week(), Some(naive.weekday()), "weekday of {d}");
        assert_eq!(d.day_of_year(), i32::try_from(naive.ordinal()).ok(), "ordinal of {d}");
        assert_eq!(CalendarDate::from(naive), d);
    }
}
