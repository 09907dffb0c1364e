// Property tests for the dates difference engine.

use chrono::{Months, NaiveDate, NaiveDateTime, TimeDelta};
use person::datediff::{Diff, FormatSpec, Unit};
use proptest::prelude::*;

fn instant() -> impl Strategy<Value = NaiveDateTime> {
    (1900i32..2100, 1u32..=12, 1u32..=28, 0u32..24).prop_map(|(y, m, d, h)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    })
}

fn interval() -> impl Strategy<Value = (NaiveDateTime, NaiveDateTime)> {
    (instant(), instant()).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

/// Formats built from one to four verbs with inert text in between.
fn format() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["%Y", "%y", "%M", "%m", "%W", "%w", "%D", "%d"]),
            prop::sample::select(vec![" ", ", ", " and ", "/", ""]),
        ),
        1..5,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(verb, sep)| format!("{verb}{sep}"))
            .collect()
    })
}

/// Walks `start` forward by the computed counts.
fn advance(start: NaiveDateTime, diff: &Diff) -> NaiveDateTime {
    let months = diff.years * 12 + diff.months;
    let days = i64::from(diff.weeks) * 7 + i64::from(diff.days);
    start.checked_add_months(Months::new(months)).unwrap() + TimeDelta::days(days)
}

proptest! {
    #[test]
    fn parsing_is_deterministic(raw in format()) {
        prop_assert_eq!(FormatSpec::parse(&raw).unwrap(), FormatSpec::parse(&raw).unwrap());
    }

    #[test]
    fn decomposition_never_overshoots((start, end) in interval(), raw in format()) {
        let diff = Diff::new(start, end, &raw).unwrap();
        prop_assert!(advance(start, &diff) <= end);
    }

    #[test]
    fn finest_unit_leaves_less_than_one_unit((start, end) in interval(), raw in format()) {
        let spec = FormatSpec::parse(&raw).unwrap();
        let diff = Diff::new(start, end, &raw).unwrap();
        let reached = advance(start, &diff);

        if spec.contains(Unit::Day) {
            prop_assert!(reached + TimeDelta::days(1) > end);
        } else if spec.contains(Unit::Week) {
            prop_assert!(reached + TimeDelta::days(7) > end);
        }
    }

    #[test]
    fn unrequested_units_are_zero((start, end) in interval(), raw in format()) {
        let spec = FormatSpec::parse(&raw).unwrap();
        let diff = Diff::new(start, end, &raw).unwrap();
        for unit in Unit::ALL {
            if !spec.contains(unit) {
                prop_assert_eq!(diff.get(unit), 0);
            }
        }
    }

    #[test]
    fn days_alone_count_the_whole_span((start, end) in interval()) {
        let diff = Diff::new(start, end, "%d").unwrap();
        prop_assert_eq!(i64::from(diff.days), (end - start).num_days());
    }

    #[test]
    fn rendering_does_not_mutate((start, end) in interval(), raw in format(), other in format()) {
        let diff = Diff::new(start, end, &raw).unwrap();
        let first = diff.to_string();
        let snapshot = diff.clone();

        diff.format(&other).unwrap();
        diff.format_without_zeros(&other).unwrap();

        prop_assert_eq!(&diff, &snapshot);
        prop_assert_eq!(diff.format_str(), raw.as_str());
        prop_assert_eq!(diff.to_string(), first);
    }

    #[test]
    fn inverted_interval_is_rejected((start, end) in interval(), raw in format()) {
        prop_assume!(start < end);
        prop_assert_eq!(Diff::new(end, start, &raw).unwrap_err(), person::Error::StartAfterEnd);
    }
}
