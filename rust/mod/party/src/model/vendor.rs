use invtrack_core::ServiceError;
use serde::{Deserialize, Serialize};

use super::{into_service_error, normalize_party, validate_party, ContactInfo};
use crate::validate::FieldError;

/// Vendor: supplier of parts for assembly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vendor {
    /// Backend id. Empty until created.
    #[serde(default)]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub contact_person: String,

    #[serde(flatten)]
    pub contact: ContactInfo,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,

    /// Payment terms in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_terms_days: Option<u32>,
}

impl Vendor {
    /// Every field error on the form.
    pub fn validate(&self) -> Vec<FieldError> {
        validate_party(&self.name, &self.contact, &self.gstin)
    }

    /// Validate and normalize before submitting to the backend.
    pub fn prepare(mut self) -> Result<Self, ServiceError> {
        into_service_error(self.validate())?;
        normalize_party(&mut self.name, &mut self.contact, &mut self.gstin);
        Ok(self)
    }
}
