use period::{Date, Time};
use rstest::rstest;

#[rstest]
#[case(1, 1, 1, 1)]
#[case(1, 12, 31, 365)]
#[case(2, 1, 1, 366)]
#[case(4, 12, 31, 1_461)]
#[case(400, 12, 31, 146_097)]
#[case(1970, 1, 1, 719_163)]
#[case(2000, 1, 1, 730_120)]
#[case(2024, 6, 15, 739_052)]
#[case(9999, 12, 31, 3_652_059)]
fn gregorian_day(#[case] year: i32, #[case] month: u8, #[case] day: u8, #[case] expected: i64) {
    let date = Date::from_calendar_date(year, month, day).unwrap();
    assert_eq!(date.to_gregorian_day(), expected);
    assert_eq!(Date::from_gregorian_day(expected).unwrap(), date);
}

#[test]
fn gregorian_day_out_of_range() {
    assert!(Date::from_gregorian_day(0).is_err());
    assert!(Date::from_gregorian_day(3_652_060).is_err());
}

#[rstest]
#[case(2019, 2, 29)]
#[case(2020, 2, 30)]
#[case(2020, 4, 31)]
#[case(2020, 13, 1)]
#[case(2020, 0, 1)]
#[case(2020, 1, 0)]
#[case(0, 1, 1)]
#[case(10_000, 1, 1)]
fn from_calendar_date_rejects(#[case] year: i32, #[case] month: u8, #[case] day: u8) {
    assert!(Date::from_calendar_date(year, month, day).is_err());
}

#[test]
fn leap_year_february() {
    assert!(Date::from_calendar_date(2020, 2, 29).is_ok());
    assert!(Date::from_calendar_date(2000, 2, 29).is_ok());
    assert!(Date::from_calendar_date(1900, 2, 29).is_err());
}

#[rstest]
#[case((2020, 1, 31), 1, (2020, 2, 29))]
#[case((2019, 1, 31), 1, (2019, 2, 28))]
#[case((2020, 1, 31), 3, (2020, 4, 30))]
#[case((2020, 3, 31), -1, (2020, 2, 29))]
#[case((2020, 5, 15), 0, (2020, 5, 15))]
#[case((2020, 11, 30), 3, (2021, 2, 28))]
#[case((2020, 1, 1), -12, (2019, 1, 1))]
fn shift_months(#[case] start: (i32, u8, u8), #[case] months: i64, #[case] expected: (i32, u8, u8)) {
    let start = Date::from_calendar_date(start.0, start.1, start.2).unwrap();
    let expected = Date::from_calendar_date(expected.0, expected.1, expected.2).unwrap();
    assert_eq!(start.shift_months(months).unwrap(), expected);
}

#[rstest]
#[case((2020, 2, 29), 1, (2021, 2, 28))]
#[case((2020, 2, 29), 4, (2024, 2, 29))]
#[case((2020, 2, 29), -4, (2016, 2, 29))]
#[case((2020, 6, 1), 100, (2120, 6, 1))]
fn shift_years(#[case] start: (i32, u8, u8), #[case] years: i64, #[case] expected: (i32, u8, u8)) {
    let start = Date::from_calendar_date(start.0, start.1, start.2).unwrap();
    let expected = Date::from_calendar_date(expected.0, expected.1, expected.2).unwrap();
    assert_eq!(start.shift_years(years).unwrap(), expected);
}

#[test]
fn shift_out_of_range() {
    let date = Date::from_calendar_date(9999, 6, 1).unwrap();
    assert!(date.shift_months(7).is_err());
    assert!(date.shift_years(1).is_err());
    let date = Date::from_calendar_date(1, 1, 1).unwrap();
    assert!(date.shift_months(-1).is_err());
}

#[test]
fn time_components() {
    let time = Time::from_hms_micro(13, 47, 30, 250_000).unwrap();
    assert_eq!(time.hour(), 13);
    assert_eq!(time.minute(), 47);
    assert_eq!(time.second(), 30);
    assert_eq!(time.microsecond(), 250_000);
    assert_eq!(time.seconds_of_day(), 13 * 3_600 + 47 * 60 + 30);
}

#[rstest]
#[case(24, 0, 0)]
#[case(0, 60, 0)]
#[case(0, 0, 60)]
fn time_rejects(#[case] hour: u8, #[case] minute: u8, #[case] second: u8) {
    assert!(Time::from_hms(hour, minute, second).is_err());
}

#[test]
fn time_rejects_overlong_microsecond() {
    assert!(Time::from_hms_micro(0, 0, 0, 1_000_000).is_err());
}
