//! age.rs
//!
//! Human-readable age of a person, e.g. "31 years, 2 months, 2 days".
//!
//! These are thin helpers over [`crate::datediff`]: the date of birth is the
//! start instant and "now" (or a given date) is the end instant. An inverted
//! interval is reported as a date of birth in the future.

use chrono::{NaiveDateTime, Utc};

use crate::datediff::{Diff, FormatSpec};
use crate::error::{Error, Result};

/// Returns the age on the current UTC date formatted with `format`.
/// Units with a zero count are left out.
pub fn age(dob: NaiveDateTime, format: &str) -> Result<String> {
    age_on(dob, now(), format)
}

/// Returns the age on `date` formatted with `format`.
///
/// The format is validated before the dates, so a bad format is reported even
/// when the date of birth is in the future.
pub fn age_on(dob: NaiveDateTime, date: NaiveDateTime, format: &str) -> Result<String> {
    let spec = FormatSpec::parse(format)?;
    let diff = diff_since_birth(dob, date, &spec)?;
    diff.format_without_zeros(format)
}

/// Whether a person born on `dob` is at least `adult_age` years old today.
pub fn is_adult(dob: NaiveDateTime, adult_age: u32) -> Result<bool> {
    is_adult_on(dob, now(), adult_age)
}

pub fn is_adult_on(dob: NaiveDateTime, date: NaiveDateTime, adult_age: u32) -> Result<bool> {
    let diff = diff_since_birth(dob, date, &FormatSpec::years())?;
    Ok(diff.years >= adult_age)
}

fn diff_since_birth(dob: NaiveDateTime, date: NaiveDateTime, spec: &FormatSpec) -> Result<Diff> {
    Diff::compute(dob, date, spec).map_err(|err| match err {
        Error::StartAfterEnd => {
            tracing::warn!(%dob, %date, "date of birth is after the reference date");
            Error::DobInFuture
        }
        other => other,
    })
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
