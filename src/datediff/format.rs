//! format.rs
//!
//! Parser for the dates difference format mini-language.
//!
//! A format is free text with two-character verbs:
//!     %Y, %y for years
//!     %M, %m for months
//!     %W, %w for weeks
//!     %D, %d for days
//!
//! Uppercase verbs render as "5 years", lowercase verbs render the bare
//! number. Everything outside of verbs is copied to the output untouched.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub(crate) const SIGIL: char = '%';

bitflags::bitflags! {
    /// Set of time units requested by a format.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Units: u8 {
        const YEARS = 1 << 0;
        const MONTHS = 1 << 1;
        const WEEKS = 1 << 2;
        const DAYS = 1 << 3;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
}

impl Unit {
    /// Units from the coarsest to the finest.
    pub const ALL: [Unit; 4] = [Unit::Year, Unit::Month, Unit::Week, Unit::Day];

    /// Singular noun used by full rendering.
    pub fn noun(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
        }
    }

    pub fn flag(self) -> Units {
        match self {
            Unit::Year => Units::YEARS,
            Unit::Month => Units::MONTHS,
            Unit::Week => Units::WEEKS,
            Unit::Day => Units::DAYS,
        }
    }
}

/// How a unit value is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rendering {
    /// Number followed by the unit noun: "3 years".
    Full,
    /// Bare number: "3".
    ValueOnly,
}

/// A recognised verb of the format mini-language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verb {
    pub letter: char,
    pub unit: Unit,
    pub rendering: Rendering,
}

impl Verb {
    /// The verb as it appears in a format string, e.g. `%Y`.
    pub fn token(&self) -> String {
        format!("{SIGIL}{}", self.letter)
    }

    pub fn lookup(letter: char) -> Option<&'static Verb> {
        VERBS.iter().find(|v| v.letter == letter)
    }
}

pub const VERBS: &[Verb] = &[
    Verb { letter: 'Y', unit: Unit::Year, rendering: Rendering::Full },
    Verb { letter: 'y', unit: Unit::Year, rendering: Rendering::ValueOnly },
    Verb { letter: 'M', unit: Unit::Month, rendering: Rendering::Full },
    Verb { letter: 'm', unit: Unit::Month, rendering: Rendering::ValueOnly },
    Verb { letter: 'W', unit: Unit::Week, rendering: Rendering::Full },
    Verb { letter: 'w', unit: Unit::Week, rendering: Rendering::ValueOnly },
    Verb { letter: 'D', unit: Unit::Day, rendering: Rendering::Full },
    Verb { letter: 'd', unit: Unit::Day, rendering: Rendering::ValueOnly },
];

/// Parsed representation of a format string.
///
/// Two formats requesting the same units with the same renderings compare
/// equal regardless of their inert text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    units: Units,
    value_only: Units,
}

impl FormatSpec {
    /// Parses `raw`, scanning left to right for `%` verbs.
    ///
    /// When a unit appears more than once the last verb decides its rendering.
    pub fn parse(raw: &str) -> Result<FormatSpec> {
        let mut spec = FormatSpec {
            units: Units::empty(),
            value_only: Units::empty(),
        };

        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            if c != SIGIL {
                continue;
            }

            let Some(letter) = chars.next() else {
                return Err(Error::DanglingSigil {
                    format: raw.to_string(),
                });
            };
            let verb = Verb::lookup(letter).ok_or_else(|| Error::UnknownVerb {
                format: raw.to_string(),
                verb: letter,
            })?;
            spec.set(verb.unit, verb.rendering);
        }

        if spec.units.is_empty() {
            return Err(Error::UndefinedMode);
        }

        tracing::trace!(format = raw, units = ?spec.units, "parsed dates difference format");
        Ok(spec)
    }

    /// Year-only spec with full rendering.
    pub fn years() -> FormatSpec {
        FormatSpec {
            units: Units::YEARS,
            value_only: Units::empty(),
        }
    }

    fn set(&mut self, unit: Unit, rendering: Rendering) {
        let flag = unit.flag();
        self.units.insert(flag);
        self.value_only
            .set(flag, rendering == Rendering::ValueOnly);
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn contains(&self, unit: Unit) -> bool {
        self.units.contains(unit.flag())
    }

    /// Rendering of `unit`, or `None` when the unit is not requested.
    pub fn rendering(&self, unit: Unit) -> Option<Rendering> {
        if !self.contains(unit) {
            return None;
        }
        if self.value_only.contains(unit.flag()) {
            Some(Rendering::ValueOnly)
        } else {
            Some(Rendering::Full)
        }
    }
}

impl FromStr for FormatSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FormatSpec::parse(s)
    }
}

/// Canonical format: requested verbs from years to days, space separated.
impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for unit in Unit::ALL {
            let Some(rendering) = self.rendering(unit) else {
                continue;
            };
            let verb = VERBS
                .iter()
                .find(|v| v.unit == unit && v.rendering == rendering)
                .ok_or(fmt::Error)?;
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", verb.token())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_verbs() {
        let cases = [
            ("   %Y   ", Unit::Year, Rendering::Full),
            ("   %y   ", Unit::Year, Rendering::ValueOnly),
            ("   %M   ", Unit::Month, Rendering::Full),
            ("   %m   ", Unit::Month, Rendering::ValueOnly),
            ("   %W   ", Unit::Week, Rendering::Full),
            ("   %w   ", Unit::Week, Rendering::ValueOnly),
            ("   %D   ", Unit::Day, Rendering::Full),
            ("   %d   ", Unit::Day, Rendering::ValueOnly),
        ];

        for (raw, unit, rendering) in cases {
            let spec = FormatSpec::parse(raw).unwrap();
            assert_eq!(spec.units(), unit.flag(), "units of {raw:?}");
            assert_eq!(spec.rendering(unit), Some(rendering), "rendering of {raw:?}");
        }
    }

    #[test]
    fn test_combined_verbs() {
        let cases = [
            ("%Y  %m%D", Units::YEARS | Units::MONTHS | Units::DAYS),
            ("  %Y%W%d", Units::YEARS | Units::WEEKS | Units::DAYS),
            (" %y%M%w %D ", Units::all()),
            ("  %y%d  ", Units::YEARS | Units::DAYS),
        ];

        for (raw, units) in cases {
            assert_eq!(FormatSpec::parse(raw).unwrap().units(), units, "{raw:?}");
        }
    }

    #[test]
    fn test_last_verb_wins() {
        assert_eq!(
            FormatSpec::parse("%y %Y").unwrap(),
            FormatSpec::parse("%Y").unwrap()
        );
        assert_eq!(
            FormatSpec::parse("%D and %d").unwrap(),
            FormatSpec::parse("%d").unwrap()
        );
    }

    #[test]
    fn test_inert_text_does_not_matter() {
        assert_eq!(
            FormatSpec::parse("%Y, %M").unwrap(),
            FormatSpec::parse("%Y%M").unwrap()
        );
    }

    #[test]
    fn test_unknown_verb() {
        let err = FormatSpec::parse("%X%L %S").unwrap_err();
        assert_eq!(err.to_string(), r#"format "%X%L %S" has unknown verb X"#);

        let err = FormatSpec::parse("%Y %Z").unwrap_err();
        assert_eq!(err.to_string(), r#"format "%Y %Z" has unknown verb Z"#);
    }

    #[test]
    fn test_sigil_is_not_a_verb() {
        let err = FormatSpec::parse("100%% %Y").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownVerb {
                format: "100%% %Y".to_string(),
                verb: '%'
            }
        );
    }

    #[test]
    fn test_dangling_sigil() {
        let err = FormatSpec::parse("%Y %").unwrap_err();
        assert_eq!(
            err,
            Error::DanglingSigil {
                format: "%Y %".to_string()
            }
        );
    }

    #[test]
    fn test_undefined_mode() {
        for raw in ["", "   ", "Years and months"] {
            assert_eq!(FormatSpec::parse(raw).unwrap_err(), Error::UndefinedMode);
        }
    }

    #[test]
    fn test_from_str() {
        let spec: FormatSpec = "%y/%m".parse().unwrap();
        assert_eq!(spec.units(), Units::YEARS | Units::MONTHS);
    }

    #[test]
    fn test_canonical_display() {
        let spec = FormatSpec::parse("%d then %Y, also %m").unwrap();
        assert_eq!(spec.to_string(), "%Y %m %d");
        assert_eq!(FormatSpec::years().to_string(), "%Y");
        assert_eq!(FormatSpec::parse(&spec.to_string()).unwrap(), spec);
    }

    #[test]
    fn test_verb_tokens() {
        let tokens: Vec<String> = VERBS.iter().map(Verb::token).collect();
        assert_eq!(
            tokens,
            ["%Y", "%y", "%M", "%m", "%W", "%w", "%D", "%d"]
        );
        assert!(Verb::lookup('Q').is_none());
    }
}
