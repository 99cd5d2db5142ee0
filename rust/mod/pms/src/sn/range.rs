//! Serial range validation, expansion and diffing.
//!
//! Every function here is pure: it inspects its inputs and returns a value or
//! a [`ValidationError`]. Mutating the working list is left to the caller.

use std::collections::HashSet;

use super::serial::{self, format_serial, MAX_SUFFIX_VALUE, SUFFIX_WIDTH};
use crate::model::InventoryItem;

/// Serial / range validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("serial prefix '{actual}' does not match expected '{expected}'")]
    PrefixMismatch { expected: String, actual: String },

    #[error("serial '{serial}' must end with exactly {expected} digits, found {actual}")]
    WrongDigitWidth {
        serial: String,
        expected: usize,
        actual: usize,
    },

    #[error("range start '{from}' is after range end '{to}'")]
    InvalidOrder { from: String, to: String },

    #[error("serial '{0}' does not end in a number")]
    NotNumeric(String),
}

/// Check that `serial` belongs to a product whose serials start with
/// `expected_prefix` and carry a six-digit suffix.
pub fn validate_against_product(serial: &str, expected_prefix: &str) -> Result<(), ValidationError> {
    let Some(rest) = serial.strip_prefix(expected_prefix) else {
        let (actual, _) = serial::split(serial);
        return Err(ValidationError::PrefixMismatch {
            expected: expected_prefix.to_string(),
            actual: actual.to_string(),
        });
    };
    // Anything after the prefix that is not part of the trailing digit run
    // counts against the width, so `AB00001X` reports 0 digits.
    let (_, digits) = serial::split(rest);
    if digits.len() != rest.len() || digits.len() != SUFFIX_WIDTH {
        return Err(ValidationError::WrongDigitWidth {
            serial: serial.to_string(),
            expected: SUFFIX_WIDTH,
            actual: digits.len(),
        });
    }
    Ok(())
}

/// Check that `from..=to` is a well-formed range.
pub fn validate_range(from: &str, to: &str) -> Result<(), ValidationError> {
    SerialRange::new(from, to).map(|_| ())
}

/// Expand `from..=to` into every serial of the range, in ascending order.
pub fn expand(from: &str, to: &str) -> Result<Vec<String>, ValidationError> {
    SerialRange::new(from, to)?.expand()
}

/// Return the members of `candidates` already in `existing`, in candidate order.
pub fn find_duplicates<S: AsRef<str>>(candidates: &[S], existing: &HashSet<String>) -> Vec<String> {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| existing.contains(*c))
        .map(str::to_string)
        .collect()
}

/// Select every item whose serial falls inside `range`.
///
/// Matching is done on the parsed numeric suffix, so stored serials that were
/// never zero-padded (`AB17`) still match. Items whose serial carries a
/// different prefix or no number at all are never selected.
pub fn diff_on_delete(range: &SerialRange, existing: &[InventoryItem]) -> Vec<InventoryItem> {
    existing
        .iter()
        .filter(|item| range.contains(&item.serial_no))
        .cloned()
        .collect()
}

/// A validated inclusive serial range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialRange {
    from: String,
    to: String,
    prefix: String,
    start: u64,
    end: u64,
}

impl SerialRange {
    /// Validate and build a range.
    ///
    /// Prefixes are compared before anything else, so differing prefixes
    /// always report `PrefixMismatch`.
    pub fn new(from: &str, to: &str) -> Result<Self, ValidationError> {
        let (from_prefix, from_digits) = serial::split(from);
        let (to_prefix, to_digits) = serial::split(to);

        if from_prefix != to_prefix {
            return Err(ValidationError::PrefixMismatch {
                expected: from_prefix.to_string(),
                actual: to_prefix.to_string(),
            });
        }

        let start = parse_digits(from, from_digits)?;
        let end = parse_digits(to, to_digits)?;
        check_width(from, from_digits, start)?;
        check_width(to, to_digits, end)?;

        if start > end {
            return Err(ValidationError::InvalidOrder {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            prefix: from_prefix.to_string(),
            start,
            end,
        })
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Numeric value of the first serial.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Numeric value of the last serial.
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of serials in the range. Never zero, at most 1_000_000.
    pub fn count(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Whether `serial` has this range's prefix and a value inside it.
    pub fn contains(&self, serial: &str) -> bool {
        match serial::parse(serial) {
            Ok(parts) => parts.prefix == self.prefix && (self.start..=self.end).contains(&parts.value),
            Err(_) => false,
        }
    }

    /// Materialize every serial of the range, zero-padded, ascending.
    pub fn expand(&self) -> Result<Vec<String>, ValidationError> {
        Ok((self.start..=self.end)
            .map(|v| format_serial(&self.prefix, v))
            .collect())
    }
}

/// Reject values that do not fit the six-digit suffix.
fn check_width(serial: &str, digits: &str, value: u64) -> Result<(), ValidationError> {
    if value > MAX_SUFFIX_VALUE {
        return Err(ValidationError::WrongDigitWidth {
            serial: serial.to_string(),
            expected: SUFFIX_WIDTH,
            actual: digits.trim_start_matches('0').len(),
        });
    }
    Ok(())
}

fn parse_digits(serial: &str, digits: &str) -> Result<u64, ValidationError> {
    if digits.is_empty() {
        return Err(ValidationError::NotNumeric(serial.to_string()));
    }
    digits
        .parse::<u64>()
        .map_err(|_| ValidationError::NotNumeric(serial.to_string()))
}
