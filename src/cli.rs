//! Command line interface
//!
//! Usage:
//!     person age <DOB> [--on <DATE>] [--format <FMT>] [--keep-zeros] [--json]
//!     person diff <START> <END> [--format <FMT>] [--keep-zeros] [--json]
//!     person adult <DOB> [--on <DATE>] [--threshold <YEARS>]
//!     person name <PARTS>... [--default <NAME>]

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use person::Diff;

use crate::config::Settings;

#[derive(Debug, Parser)]
#[command(name = "person")]
#[command(about = "Age and dates difference calculator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Age of a person born on DOB
    Age(AgeArgs),
    /// Difference between two dates
    Diff(DiffArgs),
    /// Whether a person born on DOB is an adult
    Adult(AdultArgs),
    /// Join name parts into a full name
    Name(NameArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Format, e.g. "%Y %M %D" (default: PERSON_FORMAT or "%Y %M %D")
    #[arg(short, long)]
    pub format: Option<String>,

    /// Keep units with a zero count
    #[arg(long)]
    pub keep_zeros: bool,

    /// Print a JSON report
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AgeArgs {
    /// Date of birth (YYYY-MM-DD)
    pub dob: NaiveDate,

    /// Reference date (default: today, UTC)
    #[arg(long)]
    pub on: Option<NaiveDate>,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Start date (YYYY-MM-DD)
    pub start: NaiveDate,

    /// End date (YYYY-MM-DD)
    pub end: NaiveDate,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Debug, Args)]
pub struct AdultArgs {
    /// Date of birth (YYYY-MM-DD)
    pub dob: NaiveDate,

    /// Reference date (default: today, UTC)
    #[arg(long)]
    pub on: Option<NaiveDate>,

    /// Adult age in years (default: PERSON_ADULT_AGE or 18)
    #[arg(short, long)]
    pub threshold: Option<u32>,
}

#[derive(Debug, Args)]
pub struct NameArgs {
    /// Name parts, e.g. "Johann" "Sebastian" "Bach"
    pub parts: Vec<String>,

    /// Printed when every part is blank
    #[arg(short, long)]
    pub default: Option<String>,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    start: NaiveDate,
    end: NaiveDate,
    text: String,
    #[serde(flatten)]
    diff: &'a Diff,
}

pub fn execute(cli: Cli, settings: &Settings) -> Result<String> {
    match cli.command {
        Command::Age(args) => {
            let on = args.on.unwrap_or_else(|| Utc::now().date_naive());
            diff_command(args.dob, on, &args.render, settings, true)
        }
        Command::Diff(args) => diff_command(args.start, args.end, &args.render, settings, false),
        Command::Adult(args) => {
            let on = args.on.unwrap_or_else(|| Utc::now().date_naive());
            let threshold = args.threshold.unwrap_or(settings.adult_age);
            let adult = person::is_adult_on(midnight(args.dob), midnight(on), threshold)?;
            Ok(adult.to_string())
        }
        Command::Name(args) => Ok(match args.default {
            Some(default) => person::full_name_default(&args.parts, &default),
            None => person::full_name(&args.parts),
        }),
    }
}

fn diff_command(
    start: NaiveDate,
    end: NaiveDate,
    args: &RenderArgs,
    settings: &Settings,
    is_age: bool,
) -> Result<String> {
    let format = args.format.as_deref().unwrap_or(&settings.format);
    person::FormatSpec::parse(format)?;

    let diff = Diff::new(midnight(start), midnight(end), format).map_err(|err| match err {
        person::Error::StartAfterEnd if is_age => person::Error::DobInFuture,
        other => other,
    })?;
    let text = if args.keep_zeros {
        diff.to_string()
    } else {
        diff.to_string_without_zeros()
    };

    if args.json {
        let report = Report {
            start,
            end,
            text,
            diff: &diff,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(text)
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
