//! Joining of person name parts into a full name.
//!
//! Every part is trimmed, empty parts are dropped and the rest are joined
//! with a single space.

/// Returns the full name made of the non-empty trimmed `parts`.
pub fn full_name<S: AsRef<str>>(parts: &[S]) -> String {
    join(parts.iter().map(|p| p.as_ref().to_string()))
}

/// Same as [`full_name`], falling back to `default` when nothing is left.
pub fn full_name_default<S: AsRef<str>>(parts: &[S], default: &str) -> String {
    or_default(full_name(parts), default)
}

/// Formats every part with `f` before trimming and joining.
pub fn full_name_format_fn<S, F>(parts: &[S], f: F) -> String
where
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    join(parts.iter().map(|p| f(p.as_ref())))
}

pub fn full_name_default_format_fn<S, F>(parts: &[S], default: &str, f: F) -> String
where
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    or_default(full_name_format_fn(parts, f), default)
}

fn join(parts: impl Iterator<Item = String>) -> String {
    parts
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn or_default(name: String, default: &str) -> String {
    if name.is_empty() {
        default.to_string()
    } else {
        name
    }
}
