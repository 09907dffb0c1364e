use anyhow::{Context, Result};
use person::logging::Profile;

const DEFAULT_FORMAT: &str = "%Y %M %D";
const DEFAULT_ADULT_AGE: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Format used when a command does not pass `--format`.
    pub format: String,
    pub adult_age: u32,
    pub log_profile: Profile,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            adult_age: DEFAULT_ADULT_AGE,
            log_profile: Profile::Production,
        }
    }
}

impl Settings {
    /// Reads `PERSON_FORMAT`, `PERSON_ADULT_AGE` and `PERSON_LOG`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(format) = lookup("PERSON_FORMAT") {
            person::FormatSpec::parse(&format).context("PERSON_FORMAT is not a valid format")?;
            settings.format = format;
        }

        if let Some(age) = lookup("PERSON_ADULT_AGE") {
            settings.adult_age = age
                .trim()
                .parse()
                .with_context(|| format!("PERSON_ADULT_AGE {age:?} is not a number of years"))?;
        }

        if let Some(profile) = lookup("PERSON_LOG") {
            settings.log_profile = profile
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("PERSON_LOG is not a logging profile")?;
        }

        Ok(settings)
    }
}
