//! Rendering of a [`Diff`] back into text.
//!
//! Every verb found in the template is replaced by the matching count. The
//! zero-suppressed mode drops verbs whose count is zero together with one
//! preceding space, so `"%Y %M"` gives `"3 years"` rather than
//! `"3 years 0 months"`.

use std::fmt;

use super::format::{FormatSpec, Rendering, VERBS};
use super::Diff;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zeros {
    Keep,
    Suppress,
}

impl Diff {
    /// Renders the difference with another template.
    ///
    /// The template is parsed first and its errors are returned as is.
    pub fn format(&self, raw_format: &str) -> Result<String> {
        FormatSpec::parse(raw_format)?;
        Ok(render(self, raw_format, Zeros::Keep))
    }

    /// Same as [`Diff::format`] but omits units whose count is zero.
    pub fn format_without_zeros(&self, raw_format: &str) -> Result<String> {
        FormatSpec::parse(raw_format)?;
        Ok(render(self, raw_format, Zeros::Suppress))
    }

    /// Renders the default template, omitting units whose count is zero.
    pub fn to_string_without_zeros(&self) -> String {
        render(self, self.format_str(), Zeros::Suppress)
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, self.format_str(), Zeros::Keep))
    }
}

// Assumes `raw_format` has been parsed successfully.
fn render(diff: &Diff, raw_format: &str, zeros: Zeros) -> String {
    let mut result = raw_format.to_string();

    for verb in VERBS {
        let token = verb.token();
        if !result.contains(&token) {
            continue;
        }

        let n = diff.get(verb.unit);
        if n == 0 && zeros == Zeros::Suppress {
            result = result.replace(&format!(" {token}"), "").replace(&token, "");
            continue;
        }

        let replacement = match verb.rendering {
            Rendering::Full => format!("{n} {}{}", verb.unit.noun(), plural(n)),
            Rendering::ValueOnly => n.to_string(),
        };
        result = result.replace(&token, &replacement);
    }

    result
}

/// 1, 21, 31... are singular, 11 is not.
fn plural(n: u32) -> &'static str {
    if n % 10 == 1 && n % 100 != 11 { "" } else { "s" }
}
