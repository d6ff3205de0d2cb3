use std::time::Duration as StdDuration;

use period::{Period, Step};
use rstest::rstest;

#[test]
fn equivalent_factories_compare_equal() {
    assert_eq!(Period::of_years(1).unwrap(), Period::of_months(12).unwrap());
    assert_eq!(Period::of_days(1).unwrap(), Period::of_seconds(86_400).unwrap());
    assert_eq!(Period::of_hours(1).unwrap(), Period::of_minutes(60).unwrap());
    assert_eq!(Period::of_minutes(1).unwrap(), Period::of_seconds(60).unwrap());
    assert_eq!(
        Period::of_microseconds(1_000_000).unwrap(),
        Period::of_seconds(1).unwrap(),
    );
    assert_eq!(
        Period::of_step_and_multiplier(Step::Months, 12).unwrap(),
        Period::of_years(1).unwrap(),
    );
}

#[test]
fn microseconds_collapse_to_seconds() {
    let period = Period::of_microseconds(2_000_000).unwrap();
    assert_eq!(period.step(), Step::Seconds);
    assert_eq!(period.multiplier(), 2);

    let period = Period::of_microseconds(1_500_000).unwrap();
    assert_eq!(period.step(), Step::Microseconds);
    assert_eq!(period.multiplier(), 1_500_000);
}

#[rstest]
#[case(0)]
#[case(-1)]
fn non_positive_multipliers_are_rejected(#[case] multiplier: i64) {
    assert!(Period::of_years(multiplier).is_err());
    assert!(Period::of_days(multiplier).is_err());
    assert!(Period::of_microseconds(multiplier).is_err());
}

#[test]
fn month_offset_requires_month_step() {
    assert!(Period::of_days(1).unwrap().with_month_offset(1).is_err());
    assert!(Period::of_seconds(30).unwrap().with_year_offset(1).is_err());
    assert!(Period::of_years(1).unwrap().with_month_offset(9).is_ok());
}

#[test]
fn negative_offsets_are_rejected() {
    assert!(Period::of_years(1).unwrap().with_month_offset(-1).is_err());
    assert!(Period::of_days(1).unwrap().with_hour_offset(-9).is_err());
}

#[test]
fn offsets_normalize_modulo_the_interval() {
    let year = Period::of_years(1).unwrap();
    assert_eq!(
        year.with_month_offset(13).unwrap(),
        year.with_month_offset(1).unwrap(),
    );

    let hour = Period::of_hours(1).unwrap();
    assert_eq!(
        hour.with_minute_offset(75).unwrap(),
        hour.with_minute_offset(15).unwrap(),
    );
    assert_eq!(hour.with_hour_offset(1).unwrap(), hour);
}

#[test]
fn offset_accessors() {
    let water_year = Period::of_years(1)
        .unwrap()
        .with_month_offset(9)
        .unwrap()
        .with_hour_offset(9)
        .unwrap();
    assert_eq!(water_year.month_offset(), 9);
    assert_eq!(water_year.microsecond_offset(), 9 * 3_600 * 1_000_000);
    assert_eq!(water_year.ordinal_shift(), 0);
}

#[rstest]
#[case(Period::of_years(1), true)]
#[case(Period::of_years(2), false)]
#[case(Period::of_months(1), true)]
#[case(Period::of_months(4), true)]
#[case(Period::of_months(5), false)]
#[case(Period::of_days(1), true)]
#[case(Period::of_days(7), false)]
#[case(Period::of_hours(6), true)]
#[case(Period::of_hours(7), false)]
#[case(Period::of_minutes(15), true)]
#[case(Period::of_seconds(86_400), true)]
#[case(Period::of_seconds(100_000), false)]
#[case(Period::of_microseconds(40_000), true)]
#[case(Period::of_microseconds(300_000), false)]
fn is_epoch_agnostic(
    #[case] period: Result<Period, period::error::Validation>,
    #[case] expected: bool,
) {
    assert_eq!(period.unwrap().is_epoch_agnostic(), expected);
}

#[rstest]
#[case(Period::of_years(1), "P1Y")]
#[case(Period::of_years(2), "P2Y")]
#[case(Period::of_months(1), "P1M")]
#[case(Period::of_months(18), "P1Y6M")]
#[case(Period::of_days(1), "P1D")]
#[case(Period::of_days(7), "P7D")]
#[case(Period::of_hours(1), "PT1H")]
#[case(Period::of_hours(25), "P1DT1H")]
#[case(Period::of_minutes(15), "PT15M")]
#[case(Period::of_seconds(90), "PT1M30S")]
#[case(Period::of_seconds(86_401), "P1DT1S")]
#[case(Period::of_microseconds(1_000), "PT0.001S")]
#[case(Period::of_microseconds(1_500_000), "PT1.5S")]
#[case(Period::of_microseconds(90_500_000), "PT1M30.5S")]
fn iso_duration(
    #[case] period: Result<Period, period::error::Validation>,
    #[case] expected: &str,
) {
    assert_eq!(period.unwrap().iso_duration(), expected);
}

#[test]
fn iso_duration_ignores_offsets() {
    let water_year = Period::of_years(1)
        .unwrap()
        .with_month_offset(9)
        .unwrap()
        .with_hour_offset(9)
        .unwrap();
    assert_eq!(water_year.iso_duration(), "P1Y");
}

#[test]
fn fixed_length_duration() {
    assert_eq!(
        Period::of_days(1).unwrap().duration(),
        Some(StdDuration::from_secs(86_400)),
    );
    assert_eq!(
        Period::of_microseconds(1_500).unwrap().duration(),
        Some(StdDuration::from_micros(1_500)),
    );
    assert_eq!(Period::of_months(1).unwrap().duration(), None);
    assert_eq!(Period::of_years(10).unwrap().duration(), None);
}

#[test]
fn of_std_duration() {
    assert_eq!(
        Period::of_std_duration(StdDuration::from_secs(900)).unwrap(),
        Period::of_minutes(15).unwrap(),
    );
    assert_eq!(
        Period::of_std_duration(StdDuration::from_micros(40_000)).unwrap(),
        Period::of_microseconds(40_000).unwrap(),
    );
    assert!(Period::of_std_duration(StdDuration::ZERO).is_err());
    assert!(Period::of_std_duration(StdDuration::from_nanos(1_500)).is_err());
}

#[rstest]
#[case(Period::of_minutes(15), "900s")]
#[case(Period::of_months(12), "12mo")]
#[case(Period::of_microseconds(1_500_000), "1500000us")]
#[case(Period::of_hours(1), "3600s")]
fn pl_interval(#[case] period: Result<Period, period::error::Validation>, #[case] expected: &str) {
    assert_eq!(period.unwrap().pl_interval(), expected);
}

#[test]
fn pl_offset() {
    let water_year = Period::of_years(1)
        .unwrap()
        .with_month_offset(9)
        .unwrap()
        .with_hour_offset(9)
        .unwrap();
    assert_eq!(water_year.pl_offset(), "9mo32400000000us");
    assert_eq!(Period::of_days(1).unwrap().pl_offset(), "0mo0us");
}

#[test]
fn ordering_sorts_fine_to_coarse_steps() {
    let second = Period::of_seconds(1).unwrap();
    let microsecond = Period::of_microseconds(500).unwrap();
    let month = Period::of_months(1).unwrap();
    assert!(microsecond < second);
    assert!(second < month);
}
