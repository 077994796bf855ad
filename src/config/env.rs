//! `ICOPACK_*` environment values
//!
//! An invalid value never aborts a run: it is reported and the setting
//! keeps whatever the config file said.

use std::io::Write;

/// What an `ICOPACK_*` variable accepts, as shown in its warning
#[derive(Debug, Clone, Copy)]
pub enum Accepted {
    /// A format description such as `#RGB or #RRGGBB`
    Format(&'static str),
    /// A closed set of names; near misses get a suggestion
    OneOf(&'static [&'static str]),
    /// A positive integer
    Count,
}

/// Parse the raw value of `var`.
///
/// On failure a warning is written to `out` and `None` returned.
pub fn parse_env_value<T>(
    var: &str,
    raw: &str,
    accepted: Accepted,
    parse: impl Fn(&str) -> Option<T>,
    out: &mut impl Write,
) -> Option<T> {
    if let Some(value) = parse(raw) {
        return Some(value);
    }

    let hint = match accepted {
        Accepted::Format(format) => format!("expected {}", format),
        Accepted::Count => "expected a positive integer".to_string(),
        Accepted::OneOf(names) => match closest(&raw.trim().to_lowercase(), names, 2) {
            Some(name) => format!("did you mean '{}'? (one of {})", name, names.join(", ")),
            None => format!("one of {}", names.join(", ")),
        },
    };
    let _ = writeln!(out, "Warning: Invalid {} value '{}'; {}", var, raw, hint);
    None
}

/// The candidate within `max_edits` of `input`, nearest first
pub fn closest<'c>(input: &str, candidates: &[&'c str], max_edits: usize) -> Option<&'c str> {
    candidates
        .iter()
        .map(|candidate| (*candidate, strsim::levenshtein(input, candidate)))
        .filter(|(_, dist)| *dist <= max_edits)
        .min_by_key(|(_, dist)| *dist)
        .map(|(candidate, _)| candidate)
}
