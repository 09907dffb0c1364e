//! Calendar-aware difference between two instants.
//!
//! Units are consumed greedily from years down to days. Every step measures
//! only the span left over by the coarser units, so `%Y %D` reports whole
//! years plus the remaining days rather than the total number of days.
//!
//! Year and month steps go through chrono's `checked_add_months`, which
//! clamps to the end of shorter months (Jan 31 + 1 month = Feb 28/29).

mod format;
mod render;

pub use format::{FormatSpec, Rendering, Unit, Units, VERBS, Verb};

use chrono::{Datelike, Months, NaiveDateTime};
use serde::Serialize;

use crate::error::{Error, Result};

const MONTHS_IN_YEAR: u32 = 12;
const DAYS_IN_WEEK: i64 = 7;

/// Difference between two instants broken into the requested units.
///
/// A unit that was not requested is zero, which is indistinguishable from an
/// elapsed zero; keep the [`FormatSpec`] around when that matters.
#[derive(Debug, Clone, Serialize)]
pub struct Diff {
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    format: String,
}

impl Diff {
    /// Parses `raw_format` and computes the difference it asks for.
    ///
    /// `raw_format` becomes the template used by [`Diff`]'s `Display`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, raw_format: &str) -> Result<Diff> {
        if start > end {
            return Err(Error::StartAfterEnd);
        }
        let spec = FormatSpec::parse(raw_format)?;
        let mut diff = Diff::compute(start, end, &spec)?;
        diff.format = raw_format.to_string();
        Ok(diff)
    }

    /// Computes the difference for an already parsed spec. The default
    /// template is the spec's canonical format.
    pub fn compute(start: NaiveDateTime, end: NaiveDateTime, spec: &FormatSpec) -> Result<Diff> {
        if start > end {
            return Err(Error::StartAfterEnd);
        }

        let mut diff = Diff {
            years: 0,
            months: 0,
            weeks: 0,
            days: 0,
            format: spec.to_string(),
        };
        let mut cursor = start;

        if spec.contains(Unit::Year) {
            diff.years = full_years(cursor, end);
            cursor = add_months(cursor, diff.years * MONTHS_IN_YEAR).unwrap_or(end);
        }

        if spec.contains(Unit::Month) {
            // Skip whole years up front so the month loop stays short.
            let years = if spec.contains(Unit::Year) {
                0
            } else {
                full_years(cursor, end)
            };
            diff.months = full_months(cursor, end, years * MONTHS_IN_YEAR);
            cursor = add_months(cursor, diff.months).unwrap_or(end);
        }

        let days = (end - cursor).num_days();

        if spec.contains(Unit::Week) {
            diff.weeks = to_count(days / DAYS_IN_WEEK);
        }

        if spec.contains(Unit::Day) {
            let weeks_days = if spec.contains(Unit::Week) {
                i64::from(diff.weeks) * DAYS_IN_WEEK
            } else {
                0
            };
            diff.days = to_count(days - weeks_days);
        }

        tracing::debug!(
            %start,
            %end,
            years = diff.years,
            months = diff.months,
            weeks = diff.weeks,
            days = diff.days,
            "computed dates difference"
        );
        Ok(diff)
    }

    /// The template this difference renders with by default.
    pub fn format_str(&self) -> &str {
        &self.format
    }

    pub fn get(&self, unit: Unit) -> u32 {
        match unit {
            Unit::Year => self.years,
            Unit::Month => self.months,
            Unit::Week => self.weeks,
            Unit::Day => self.days,
        }
    }
}

/// Differences are equal when their counts are; the template is presentation.
impl PartialEq for Diff {
    fn eq(&self, other: &Self) -> bool {
        self.years == other.years
            && self.months == other.months
            && self.weeks == other.weeks
            && self.days == other.days
    }
}

impl Eq for Diff {}

fn add_months(start: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    start.checked_add_months(Months::new(months))
}

/// Whether `start` advanced by `months` still lands at or before `end`.
fn fits(start: NaiveDateTime, months: u32, end: NaiveDateTime) -> bool {
    add_months(start, months).is_some_and(|d| d <= end)
}

fn full_years(start: NaiveDateTime, end: NaiveDateTime) -> u32 {
    let mut years = to_count(i64::from(end.year() - start.year()));
    if years > 0 && !fits(start, years * MONTHS_IN_YEAR, end) {
        years -= 1;
    }
    years
}

/// Counts whole months from `start` to `end`, starting at `from` which is
/// known to fit. Always measured from `start` itself so that a clamped
/// intermediate date never shifts later months.
fn full_months(start: NaiveDateTime, end: NaiveDateTime, from: u32) -> u32 {
    let mut months = from;
    while fits(start, months + 1, end) {
        months += 1;
    }
    months
}

fn to_count(n: i64) -> u32 {
    u32::try_from(n.max(0)).unwrap_or(u32::MAX)
}
