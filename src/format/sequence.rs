use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TRAILING_DIGITS: Regex = Regex::new(r"(\d+)$").unwrap();
}

/// Compute the next sequence number from the most recent code.
///
/// `None` (empty table) starts the sequence at 1. Otherwise the trailing
/// digit run of the previous code is parsed and incremented.
///
/// Known limitation: the trailing-digit match is not validated against the
/// entity's expected format. A code whose tail is not numeric (e.g.
/// `LAP-12A`) restarts the sequence at 1, and collisions with already-taken
/// low numbers are left to the caller's retry loop.
pub fn next_sequence(previous_code: Option<&str>) -> u64 {
    let Some(code) = previous_code else {
        return 1;
    };

    TRAILING_DIGITS
        .captures(code)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u64>().ok())
        .map(|n| n + 1)
        .unwrap_or(1)
}

/// Format a code from its parts, zero-padding the number to `width` digits.
///
/// A number wider than `width` is printed in full rather than truncated.
pub fn format_code(prefix: &str, separator: &str, number: u64, width: usize) -> String {
    format!("{}{}{:0w$}", prefix, separator, number, w = width)
}

/// The sequence position reconstructed from the store for one entity type.
///
/// There is no persisted counter: the position is a transient view derived
/// from the entity table itself, either from the most recent code or from
/// the row count. Concurrent creations can observe the same state and
/// compute the same next number; uniqueness is enforced downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceState {
    /// No rows exist yet.
    Empty,
    /// The code of the most recently created row.
    LastCode(String),
    /// The current row count of the entity table.
    Count(u64),
}

impl SequenceState {
    /// The next number in the sequence.
    pub fn next(&self) -> u64 {
        match self {
            Self::Empty => 1,
            Self::LastCode(code) => next_sequence(Some(code)),
            Self::Count(count) => count + 1,
        }
    }
}
