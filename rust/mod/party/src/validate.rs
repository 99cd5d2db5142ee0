//! Field validators for party forms: phone, GSTIN, pincode, email.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref MOBILE_RE: Regex = Regex::new(r"^[6-9][0-9]{9}$").unwrap();
    static ref GSTIN_RE: Regex =
        Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").unwrap();
    static ref PINCODE_RE: Regex = Regex::new(r"^[1-9][0-9]{5}$").unwrap();
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$").unwrap();
}

/// GSTIN check character alphabet (base 36).
const GSTIN_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Field validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartyError {
    #[error("'{0}' is not a valid 10-digit mobile number")]
    InvalidPhone(String),

    #[error("'{0}' is not a valid GSTIN")]
    InvalidGstin(String),

    #[error("GSTIN '{0}' has a wrong check character")]
    GstinChecksum(String),

    #[error("'{0}' is not a valid 6-digit pincode")]
    InvalidPincode(String),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// One failed form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Reduce a phone number to its 10 significant digits.
///
/// Spaces, dashes, dots and parentheses are ignored; a `+91`, `91` or `0`
/// trunk prefix is dropped.
pub fn normalize_phone(input: &str) -> Result<String, PartyError> {
    let cleaned: String = input
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect();
    let digits = if let Some(rest) = cleaned.strip_prefix("+91") {
        rest
    } else if cleaned.len() == 12 && cleaned.starts_with("91") {
        &cleaned[2..]
    } else if cleaned.len() == 11 && cleaned.starts_with('0') {
        &cleaned[1..]
    } else {
        cleaned.as_str()
    };

    if MOBILE_RE.is_match(digits) {
        Ok(digits.to_string())
    } else {
        Err(PartyError::InvalidPhone(input.to_string()))
    }
}

pub fn validate_phone(input: &str) -> Result<(), PartyError> {
    normalize_phone(input).map(|_| ())
}

/// Validate a GSTIN and return it uppercased.
///
/// Checks the layout (state code, PAN, entity number, `Z`, check character)
/// and the mod-36 check character.
pub fn validate_gstin(input: &str) -> Result<String, PartyError> {
    let gstin = input.trim().to_ascii_uppercase();
    if !GSTIN_RE.is_match(&gstin) {
        return Err(PartyError::InvalidGstin(input.to_string()));
    }
    let bytes = gstin.as_bytes();
    if gstin_check_char(&bytes[..14]) != Some(bytes[14]) {
        return Err(PartyError::GstinChecksum(gstin));
    }
    Ok(gstin)
}

fn gstin_check_char(body: &[u8]) -> Option<u8> {
    let mut sum = 0usize;
    for (i, b) in body.iter().enumerate() {
        let value = GSTIN_ALPHABET.iter().position(|a| a == b)?;
        let product = value * if i % 2 == 0 { 1 } else { 2 };
        sum += product / 36 + product % 36;
    }
    Some(GSTIN_ALPHABET[(36 - sum % 36) % 36])
}

pub fn validate_pincode(input: &str) -> Result<(), PartyError> {
    if PINCODE_RE.is_match(input.trim()) {
        Ok(())
    } else {
        Err(PartyError::InvalidPincode(input.to_string()))
    }
}

pub fn validate_email(input: &str) -> Result<(), PartyError> {
    if EMAIL_RE.is_match(input.trim()) {
        Ok(())
    } else {
        Err(PartyError::InvalidEmail(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_formats() {
        for ok in ["9876543210", "+91 98765 43210", "91-9876543210", "09876543210", "(987) 654-3210"] {
            assert_eq!(normalize_phone(ok).unwrap(), "9876543210", "{ok}");
        }
    }

    #[test]
    fn phone_rejects() {
        for bad in ["", "12345", "5876543210", "98765432101", "+1 9876543210", "98765abcde"] {
            assert_eq!(
                validate_phone(bad),
                Err(PartyError::InvalidPhone(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn gstin_valid() {
        assert_eq!(validate_gstin("27AAPFU0939F1ZV").unwrap(), "27AAPFU0939F1ZV");
        assert_eq!(validate_gstin(" 29aagcb7383j1z4 ").unwrap(), "29AAGCB7383J1Z4");
    }

    #[test]
    fn gstin_layout_and_checksum() {
        assert!(matches!(validate_gstin("27AAPFU0939F1Z"), Err(PartyError::InvalidGstin(_))));
        assert!(matches!(validate_gstin("27AAPFU0939F1XV"), Err(PartyError::InvalidGstin(_))));
        assert_eq!(
            validate_gstin("27AAPFU0939F1ZW"),
            Err(PartyError::GstinChecksum("27AAPFU0939F1ZW".into()))
        );
    }

    #[test]
    fn pincode() {
        assert!(validate_pincode("560001").is_ok());
        assert!(validate_pincode("060001").is_err());
        assert!(validate_pincode("56001").is_err());
        assert!(validate_pincode("5600011").is_err());
    }

    #[test]
    fn email() {
        assert!(validate_email("stores@acme.co.in").is_ok());
        assert!(validate_email("stores@acme").is_err());
        assert!(validate_email("@acme.com").is_err());
    }
}
