//! Serial range engine.
//!
//! A serial number is a product prefix followed by a six-digit, zero-padded
//! suffix (`AB000123`). A batch of assembled units is described by an
//! inclusive range of such serials sharing one prefix.
//!
//! ## Quick start
//!
//! ```rust
//! use invtrack_pms::sn::{expand, validate_against_product, validate_range};
//!
//! validate_against_product("AB000001", "AB").unwrap();
//! validate_against_product("AB000003", "AB").unwrap();
//! validate_range("AB000001", "AB000003").unwrap();
//!
//! let serials = expand("AB000001", "AB000003").unwrap();
//! assert_eq!(serials, ["AB000001", "AB000002", "AB000003"]);
//! ```

pub mod config;
pub mod range;
pub mod serial;

pub use config::{default_config, CatalogConfig, ConfigError};
pub use range::{
    diff_on_delete, expand, find_duplicates, validate_against_product, validate_range,
    SerialRange, ValidationError,
};
pub use serial::{format_serial, parse, ParseError, SerialParts, SUFFIX_WIDTH};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Form flow: validate both ends, validate the range, expand, check overlap.
    #[test]
    fn end_to_end_add_flow() {
        let prefix = "AB";
        let (from, to) = ("AB000001", "AB000005");

        validate_against_product(from, prefix).unwrap();
        validate_against_product(to, prefix).unwrap();
        validate_range(from, to).unwrap();

        let serials = expand(from, to).unwrap();
        assert_eq!(serials.len(), 5);

        let existing: HashSet<String> = expand("AB000004", "AB000009").unwrap().into_iter().collect();
        assert_eq!(find_duplicates(&serials, &existing), vec!["AB000004", "AB000005"]);
    }

    /// Every expanded serial parses back to the range's prefix and its value.
    #[test]
    fn expanded_serials_parse_back() {
        let range = SerialRange::new("QX000098", "QX000102").unwrap();
        let serials = range.expand().unwrap();
        for (i, s) in serials.iter().enumerate() {
            let parts = parse(s).unwrap();
            assert_eq!(parts.prefix, "QX");
            assert_eq!(parts.digits.len(), SUFFIX_WIDTH);
            assert_eq!(parts.value, 98 + i as u64);
            assert_eq!(&format_serial(&parts.prefix, parts.value), s);
        }
    }

    /// Errors render a message suitable for a form field.
    #[test]
    fn error_messages() {
        let err = validate_against_product("XY000010", "AB").unwrap_err();
        assert_eq!(err.to_string(), "serial prefix 'XY' does not match expected 'AB'");

        let err = parse("ABC").unwrap_err();
        assert_eq!(err.to_string(), "serial 'ABC' has no trailing digits");
    }
}
