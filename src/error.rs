use thiserror::Error;

/// Result type alias using the crate [`enum@Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the dates difference engine and the age helpers.
///
/// None of these are transient; every variant describes bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A `%` sigil is followed by a letter that is not a known verb.
    #[error("format {format:?} has unknown verb {verb}")]
    UnknownVerb { format: String, verb: char },

    /// The format string ends with a bare `%`.
    #[error("format {format:?} has dangling verb sigil")]
    DanglingSigil { format: String },

    /// The format string does not request any unit.
    #[error("undefined dates difference mode")]
    UndefinedMode,

    #[error("start date is after end date")]
    StartAfterEnd,

    #[error("date of birth is in the future")]
    DobInFuture,
}
