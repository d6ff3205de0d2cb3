use period::{DateTime, Error, Period, Time, Tz, UtcOffset};
use rstest::rstest;

use crate::datetime;

#[rstest]
#[case("P1Y", Period::of_years(1))]
#[case("p1y", Period::of_years(1))]
#[case("P2Y", Period::of_years(2))]
#[case("P1M", Period::of_months(1))]
#[case("P18M", Period::of_months(18))]
#[case("P1Y6M", Period::of_months(18))]
#[case("P1D", Period::of_days(1))]
#[case("P7D", Period::of_days(7))]
#[case("PT1H", Period::of_hours(1))]
#[case("P1DT1H", Period::of_hours(25))]
#[case("PT15M", Period::of_minutes(15))]
#[case("pt15m", Period::of_minutes(15))]
#[case("PT1M30S", Period::of_seconds(90))]
#[case("PT0.001S", Period::of_microseconds(1_000))]
#[case("PT0.04S", Period::of_microseconds(40_000))]
#[case("PT1.5S", Period::of_microseconds(1_500_000))]
#[case("PT1.000000S", Period::of_seconds(1))]
#[case("P1H", Period::of_hours(1))]
fn iso_duration(
    #[case] input: &str,
    #[case] expected: Result<Period, period::error::Validation>,
) {
    let expected = expected.unwrap();
    assert_eq!(Period::of_iso_duration(input).unwrap(), expected);
    assert_eq!(Period::parse(input).unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("1Y")]
#[case(" P1Y")]
#[case("P1Y ")]
#[case("PX")]
#[case("P1.5D")]
#[case("P1Y2X")]
#[case("P-1Y")]
fn unparseable_strings(#[case] input: &str) {
    assert!(matches!(Period::parse(input), Err(Error::Parse(_))));
}

#[rstest]
#[case("P")]
#[case("P0Y")]
#[case("PT0S")]
#[case("P0YT0S")]
fn zero_durations_are_invalid(#[case] input: &str) {
    assert!(matches!(Period::parse(input), Err(Error::Validation(_))));
}

#[rstest]
#[case("P1Y5S")]
#[case("P1M1D")]
#[case("P1MT30M")]
fn mixed_step_durations_are_invalid(#[case] input: &str) {
    assert!(matches!(Period::parse(input), Err(Error::Validation(_))));
}

#[test]
fn offset_duration() {
    let water_year = Period::of_years(1)
        .unwrap()
        .with_month_offset(9)
        .unwrap()
        .with_hour_offset(9)
        .unwrap();
    assert_eq!(Period::of_duration("P1Y+9M9H").unwrap(), water_year);
    assert_eq!(Period::parse("P1Y+9M9H").unwrap(), water_year);
    assert_eq!(Period::of_duration("P1Y+9MT9H").unwrap(), water_year);

    assert_eq!(
        Period::of_duration("P1D+9H").unwrap(),
        Period::of_days(1).unwrap().with_hour_offset(9).unwrap(),
    );
    assert_eq!(
        Period::of_duration("PT15M+30S").unwrap(),
        Period::of_minutes(15).unwrap().with_second_offset(30).unwrap(),
    );

    // A plain duration is still accepted by the extended entry point.
    assert_eq!(Period::of_duration("P1Y").unwrap(), Period::of_years(1).unwrap());
}

#[test]
fn offset_duration_requires_a_compatible_step() {
    assert!(matches!(
        Period::parse("PT15M+1M"),
        Err(Error::Validation(_)),
    ));
    assert!(matches!(Period::parse("P1Y+"), Err(Error::Validation(_))));
}

#[test]
fn date_and_duration() {
    let parsed = Period::parse("1980-10-01T09:00:00/P1Y").unwrap();
    let expected = Period::of_years(1)
        .unwrap()
        .with_origin(&datetime("1980-10-01T09:00:00"))
        .unwrap()
        .without_ordinal_shift();
    assert_eq!(parsed, expected);
    assert_eq!(
        parsed,
        Period::of_years(1)
            .unwrap()
            .with_month_offset(9)
            .unwrap()
            .with_hour_offset(9)
            .unwrap(),
    );
    assert_eq!(parsed.ordinal_shift(), 0);
}

#[test]
fn date_and_duration_at_a_natural_boundary() {
    assert_eq!(
        Period::of_date_and_duration("1980-01-01/P1D").unwrap(),
        Period::of_days(1).unwrap(),
    );
}

#[test]
fn date_and_duration_carries_the_origin_zone() {
    let parsed = Period::parse("1980-01-01T00:00:00Z/P1D").unwrap();
    assert_eq!(parsed.tzinfo(), Some(&Tz::UTC));
}

#[rstest]
#[case("P1Y[]")]
#[case("P1Y[Z]")]
#[case("P1Y[+01:00]")]
#[case("P1Y[-05:30]")]
#[case("P1Y+9M9H[]")]
#[case("P1Y+9M9H[Z]-42")]
#[case("P1D[]7")]
fn repr_round_trips(#[case] input: &str) {
    let parsed = Period::of_repr(input).unwrap();
    assert_eq!(format!("{parsed:?}"), input);
    assert_eq!(Period::parse(&format!("{parsed:?}")).unwrap(), parsed);
}

#[test]
fn repr_shift_relabels_ordinals() {
    let shifted = Period::of_repr("P1Y[]-42").unwrap();
    assert_eq!(shifted.ordinal_shift(), -42);
    assert_eq!(shifted.ordinal(&datetime("1984-06-01")).unwrap(), 1984 - 42);

    let forward = Period::of_repr("P1Y[]42").unwrap();
    assert_eq!(forward.ordinal(&datetime("1984-06-01")).unwrap(), 1984 + 42);
}

#[test]
fn repr_zone_is_attached() {
    let parsed = Period::of_repr("P1D[+01:00]").unwrap();
    assert_eq!(
        parsed.tzinfo(),
        Some(&Tz::Fixed(UtcOffset::from_hms(1, 0).unwrap())),
    );
    assert_eq!(Period::of_repr("P1D[]").unwrap().tzinfo(), None);
}

#[test]
fn repr_requires_brackets() {
    assert!(Period::of_repr("P1Y").is_err());
    assert!(Period::of_repr("P1Y[").is_err());
    assert!(Period::of_repr("P1Y]").is_err());
}

#[test]
fn debug_of_origin_pinned_period_round_trips() {
    let pinned = Period::of_years(1)
        .unwrap()
        .with_origin(&datetime("1980-10-01T09:00:00Z"))
        .unwrap();
    assert_eq!(format!("{pinned:?}"), "P1Y+9M9H[Z]-1980");
    assert_eq!(Period::parse(&format!("{pinned:?}")).unwrap(), pinned);
}

#[rstest]
#[case("1984", "1984-01-01T00:00:00")]
#[case("1984-06", "1984-06-01T00:00:00")]
#[case("1984-06-15", "1984-06-15T00:00:00")]
#[case("1984-6-5", "1984-06-05T00:00:00")]
#[case("1984-06-15T13", "1984-06-15T13:00:00")]
#[case("1984-06-15t13:47", "1984-06-15T13:47:00")]
#[case("1984-06-15 13:47:30", "1984-06-15T13:47:30")]
#[case("1984-06-15  13:47:30", "1984-06-15T13:47:30")]
#[case("1984-06-15T13:47:30.5", "1984-06-15T13:47:30.500000")]
#[case("1984-06-15T13:47:30.000001", "1984-06-15T13:47:30.000001")]
fn date_time_forms(#[case] input: &str, #[case] canonical: &str) {
    assert_eq!(datetime(input), datetime(canonical));
}

#[test]
fn date_time_zone_suffixes() {
    assert_eq!(
        DateTime::parse("1984-06-15T13:47:30Z").unwrap().tz(),
        Some(&Tz::UTC),
    );
    assert_eq!(
        DateTime::parse("1984-06-15T13:47:30+01:00").unwrap().tz(),
        Some(&Tz::Fixed(UtcOffset::from_hms(1, 0).unwrap())),
    );
    assert_eq!(
        DateTime::parse("1984-06-15T13:47:30-5").unwrap().tz(),
        Some(&Tz::Fixed(UtcOffset::from_hms(-5, 0).unwrap())),
    );
    assert_eq!(DateTime::parse("1984-06-15T13:47:30").unwrap().tz(), None);
}

#[rstest]
#[case("84")]
#[case("1984-13-01")]
#[case("1984-02-30")]
#[case("1984-06-15T24:00:00")]
#[case("1984-06-15T13:47:30x")]
#[case("1984-06-15T13Z")]
#[case("not a datetime")]
fn unparseable_date_times(#[case] input: &str) {
    assert!(DateTime::parse(input).is_err());
}

#[test]
fn date_time_components_default_to_midnight() {
    let parsed = DateTime::parse("1984").unwrap();
    assert_eq!(parsed.date().year(), 1984);
    assert_eq!(parsed.date().month(), 1);
    assert_eq!(parsed.date().day(), 1);
    assert_eq!(parsed.time(), Time::MIDNIGHT);
}
