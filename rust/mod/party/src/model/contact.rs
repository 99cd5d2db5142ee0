use serde::{Deserialize, Serialize};

use crate::validate::{normalize_phone, validate_email, validate_pincode, FieldError};

/// Contact and address block shared by vendors and customers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactInfo {
    pub phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub state: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
}

impl ContactInfo {
    /// Check phone (required), email and pincode (when filled in).
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.phone.trim().is_empty() {
            errors.push(FieldError::new("phone", "phone is required"));
        } else if let Err(e) = normalize_phone(&self.phone) {
            errors.push(FieldError::new("phone", e.to_string()));
        }
        if let Some(email) = filled(&self.email) {
            if let Err(e) = validate_email(email) {
                errors.push(FieldError::new("email", e.to_string()));
            }
        }
        if let Some(pincode) = filled(&self.pincode) {
            if let Err(e) = validate_pincode(pincode) {
                errors.push(FieldError::new("pincode", e.to_string()));
            }
        }
        errors
    }

    /// Rewrite the phone in its 10-digit form. Leaves invalid input untouched.
    pub fn normalize(&mut self) {
        if let Ok(phone) = normalize_phone(&self.phone) {
            self.phone = phone;
        }
    }
}

/// Treat blank optional fields as absent.
pub(crate) fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
