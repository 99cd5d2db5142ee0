//! Serial number parsing: splits `AB000123` into prefix and numeric suffix.

/// Width of the zero-padded numeric suffix of every serial number.
pub const SUFFIX_WIDTH: usize = 6;

/// Largest suffix value representable in [`SUFFIX_WIDTH`] digits.
pub const MAX_SUFFIX_VALUE: u64 = 999_999;

/// A serial number split into its prefix and trailing digit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialParts {
    /// Everything before the trailing digit run. May be empty.
    pub prefix: String,
    /// The trailing digit run, as written (padding preserved).
    pub digits: String,
    /// Integer value of `digits`.
    pub value: u64,
}

impl SerialParts {
    /// Rebuild the canonical serial string: prefix + zero-padded value.
    pub fn canonical(&self) -> String {
        format_serial(&self.prefix, self.value)
    }
}

/// Serial parse errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("serial '{0}' has no trailing digits")]
    NoDigits(String),

    #[error("serial '{0}' numeric suffix is too large")]
    Overflow(String),
}

/// Split a serial into `(prefix, digits)` without interpreting the digits.
///
/// `digits` is the trailing run of ASCII digits and may be empty.
pub(crate) fn split(serial: &str) -> (&str, &str) {
    let idx = serial
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)
        .unwrap_or(serial.len());
    serial.split_at(idx)
}

/// Parse a serial number into prefix, digit run and numeric value.
pub fn parse(serial: &str) -> Result<SerialParts, ParseError> {
    let (prefix, digits) = split(serial);
    if digits.is_empty() {
        return Err(ParseError::NoDigits(serial.to_string()));
    }
    let value = digits
        .parse::<u64>()
        .map_err(|_| ParseError::Overflow(serial.to_string()))?;
    Ok(SerialParts {
        prefix: prefix.to_string(),
        digits: digits.to_string(),
        value,
    })
}

/// Format `prefix + value` with the value zero-padded to [`SUFFIX_WIDTH`].
pub fn format_serial(prefix: &str, value: u64) -> String {
    format!("{prefix}{value:0width$}", width = SUFFIX_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_prefixed() {
        let p = parse("AB000123").unwrap();
        assert_eq!(p.prefix, "AB");
        assert_eq!(p.digits, "000123");
        assert_eq!(p.value, 123);
    }

    #[test]
    fn parse_empty_prefix() {
        let p = parse("000042").unwrap();
        assert_eq!(p.prefix, "");
        assert_eq!(p.value, 42);
    }

    #[test]
    fn parse_alphanumeric_prefix() {
        let p = parse("H1X-000007").unwrap();
        assert_eq!(p.prefix, "H1X-");
        assert_eq!(p.digits, "000007");
        assert_eq!(p.value, 7);
    }

    #[test]
    fn parse_unpadded() {
        let p = parse("AB17").unwrap();
        assert_eq!(p.digits, "17");
        assert_eq!(p.value, 17);
        assert_eq!(p.canonical(), "AB000017");
    }

    #[test]
    fn parse_no_digits() {
        assert_eq!(parse("ABC"), Err(ParseError::NoDigits("ABC".into())));
        assert_eq!(parse(""), Err(ParseError::NoDigits(String::new())));
        assert_eq!(parse("12AB"), Err(ParseError::NoDigits("12AB".into())));
    }

    #[test]
    fn parse_overflow() {
        let s = "AB99999999999999999999999";
        assert!(matches!(parse(s), Err(ParseError::Overflow(_))));
    }

    #[test]
    fn split_multibyte_prefix() {
        assert_eq!(split("Ü12"), ("Ü", "12"));
        assert_eq!(split("Ü"), ("Ü", ""));
    }

    #[test]
    fn format_pads_to_six() {
        assert_eq!(format_serial("AB", 1), "AB000001");
        assert_eq!(format_serial("", MAX_SUFFIX_VALUE), "999999");
    }
}
