use invtrack_core::ServiceError;
use serde::{Deserialize, Serialize};

use super::{into_service_error, normalize_party, validate_party, ContactInfo};
use crate::validate::FieldError;

/// Customer: buyer of assembled products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    #[serde(default)]
    pub id: String,

    pub name: String,

    #[serde(flatten)]
    pub contact: ContactInfo,

    /// Required only for business customers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,
}

impl Customer {
    pub fn validate(&self) -> Vec<FieldError> {
        validate_party(&self.name, &self.contact, &self.gstin)
    }

    pub fn prepare(mut self) -> Result<Self, ServiceError> {
        into_service_error(self.validate())?;
        normalize_party(&mut self.name, &mut self.contact, &mut self.gstin);
        Ok(self)
    }
}
