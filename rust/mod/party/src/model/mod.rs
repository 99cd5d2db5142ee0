mod contact;
mod customer;
mod vendor;

pub use contact::*;
pub use customer::*;
pub use vendor::*;

use contact::filled;
use invtrack_core::ServiceError;

use crate::validate::{validate_gstin, FieldError};

/// Fold field errors into one service error for a notification toast.
pub(crate) fn into_service_error(errors: Vec<FieldError>) -> Result<(), ServiceError> {
    if errors.is_empty() {
        return Ok(());
    }
    let message = errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(ServiceError::Validation(message))
}

/// Field checks shared by every party record: name, contact block, GSTIN.
pub(crate) fn validate_party(
    name: &str,
    contact: &ContactInfo,
    gstin: &Option<String>,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push(FieldError::new("name", "name is required"));
    }
    errors.extend(contact.validate());
    if let Some(gstin) = filled(gstin) {
        if let Err(e) = validate_gstin(gstin) {
            errors.push(FieldError::new("gstin", e.to_string()));
        }
    }
    errors
}

/// Trim the name, normalize contact fields and upper-case the GSTIN.
/// A blank GSTIN becomes `None`.
pub(crate) fn normalize_party(name: &mut String, contact: &mut ContactInfo, gstin: &mut Option<String>) {
    *name = name.trim().to_string();
    contact.normalize();
    *gstin = filled(gstin).map(str::to_ascii_uppercase);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn party_checks_in_form_order() {
        let contact = ContactInfo {
            phone: "12345".into(),
            ..Default::default()
        };
        let fields: Vec<String> = validate_party(" ", &contact, &Some("27AAPFU0939F1ZX".into()))
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["name", "phone", "gstin"]);
    }

    #[test]
    fn normalize_blank_gstin() {
        let mut name = "  Acme ".to_string();
        let mut contact = ContactInfo {
            phone: "+91 98765 43210".into(),
            ..Default::default()
        };
        let mut gstin = Some("  ".to_string());
        normalize_party(&mut name, &mut contact, &mut gstin);
        assert_eq!(name, "Acme");
        assert_eq!(contact.phone, "9876543210");
        assert_eq!(gstin, None);

        let mut gstin = Some("27aapfu0939f1zv".to_string());
        normalize_party(&mut name, &mut contact, &mut gstin);
        assert_eq!(gstin.as_deref(), Some("27AAPFU0939F1ZV"));
    }

    #[test]
    fn errors_fold_into_one_message() {
        assert!(into_service_error(vec![]).is_ok());
        let err = into_service_error(vec![
            FieldError::new("name", "name is required"),
            FieldError::new("phone", "phone is required"),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "name: name is required; phone: phone is required");
    }
}
