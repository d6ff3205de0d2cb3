use period::{Period, Tz, UtcOffset};
use rstest::rstest;

use crate::datetime;

#[rstest]
#[case(Period::of_years(1), "2006-10-01T09:30:15.250000", "2006")]
#[case(Period::of_years(10), "2006-10-01T09:30:15.250000", "2006")]
#[case(Period::of_months(1), "2006-10-01T09:30:15.250000", "2006-10")]
#[case(Period::of_days(1), "2006-10-01T09:30:15.250000", "2006-10-01")]
#[case(Period::of_days(7), "2006-10-01T09:30:15.250000", "2006-10-01")]
#[case(Period::of_hours(1), "2006-10-01T09:30:15.250000", "2006-10-01T09")]
#[case(Period::of_minutes(15), "2006-10-01T09:30:15.250000", "2006-10-01T09:30")]
#[case(Period::of_seconds(15), "2006-10-01T09:30:15.250000", "2006-10-01T09:30:15")]
#[case(Period::of_microseconds(1_000), "2006-10-01T09:30:15.250000", "2006-10-01T09:30:15.250")]
#[case(Period::of_microseconds(1_500), "2006-10-01T09:30:15.250000", "2006-10-01T09:30:15.250000")]
#[case(Period::of_microseconds(500_000), "2006-10-01T09:30:15.250000", "2006-10-01T09:30:15.250")]
fn naive_precision_follows_the_magnitude(
    #[case] period: Result<Period, period::error::Validation>,
    #[case] timestamp: &str,
    #[case] expected: &str,
) {
    let formatter = period.unwrap().naive_formatter('T').unwrap();
    assert_eq!(formatter.format(&datetime(timestamp)), expected);
}

#[test]
fn offsets_force_finer_precision() {
    let water_year = Period::of_years(1)
        .unwrap()
        .with_month_offset(9)
        .unwrap()
        .with_hour_offset(9)
        .unwrap();
    let formatter = water_year.naive_formatter('T').unwrap();
    assert_eq!(formatter.format(&datetime("2006-10-01T09:00:00")), "2006-10-01T09");

    let offset_day = Period::of_days(1).unwrap().with_second_offset(30).unwrap();
    let formatter = offset_day.naive_formatter('T').unwrap();
    assert_eq!(
        formatter.format(&datetime("2006-10-01T00:00:30")),
        "2006-10-01T00:00:30",
    );

    let offset_month = Period::of_months(1).unwrap().with_day_offset(3).unwrap();
    let formatter = offset_month.naive_formatter('T').unwrap();
    assert_eq!(formatter.format(&datetime("2006-10-04T00:00:00")), "2006-10-04");
}

#[test]
fn separator_appears_between_date_and_time() {
    let hour = Period::of_hours(1).unwrap();
    let timestamp = datetime("2006-10-01T09:00:00");
    assert_eq!(
        hour.naive_formatter(' ').unwrap().format(&timestamp),
        "2006-10-01 09",
    );
    assert_eq!(
        hour.naive_formatter('t').unwrap().format(&timestamp),
        "2006-10-01t09",
    );
}

#[rstest]
#[case('x')]
#[case('-')]
#[case('/')]
fn invalid_separators_are_rejected(#[case] separator: char) {
    assert!(Period::of_hours(1).unwrap().naive_formatter(separator).is_err());
    assert!(Period::of_hours(1).unwrap().aware_formatter(separator).is_err());
    assert!(Period::of_hours(1).unwrap().formatter(separator).is_err());
}

#[test]
fn aware_formatting_floors_at_hours_and_appends_the_zone() {
    let year = Period::of_years(1).unwrap().with_tzinfo(Some(Tz::UTC));
    let formatter = year.formatter(' ').unwrap();
    let start = year.datetime(1984).unwrap();
    assert_eq!(formatter.format(&start), "1984-01-01 00Z");

    let offset = Tz::Fixed(UtcOffset::from_hms(1, 0).unwrap());
    let day = Period::of_days(1).unwrap().with_tzinfo(Some(offset));
    let formatter = day.formatter('T').unwrap();
    let start = day.datetime(739_052).unwrap();
    assert_eq!(formatter.format(&start), "2024-06-15T00+01:00");
}

#[test]
fn aware_formatter_renders_named_zones_as_empty_suffix() {
    let day = Period::of_days(1)
        .unwrap()
        .with_tzinfo(Some(Tz::named("Europe/London")));
    let formatter = day.formatter('T').unwrap();
    let start = day.datetime(739_052).unwrap();
    assert_eq!(formatter.format(&start), "2024-06-15T00");
}

#[test]
fn naive_formatter_is_selected_without_a_zone() {
    let year = Period::of_years(1).unwrap();
    let formatter = year.formatter('T').unwrap();
    assert_eq!(formatter.format(&datetime("1984-01-01")), "1984");
}

#[test]
fn aware_minute_grid_keeps_minute_precision() {
    let minutes = Period::of_minutes(15).unwrap().with_tzinfo(Some(Tz::UTC));
    let formatter = minutes.formatter('T').unwrap();
    let timestamp = datetime("2006-10-01T09:30:00").replace_tz(Some(Tz::UTC));
    assert_eq!(formatter.format(&timestamp), "2006-10-01T09:30Z");
}
