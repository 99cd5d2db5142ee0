//! Vendors and customers: records and the field checks their forms run
//! before anything is sent to the backend.

pub mod model;
pub mod validate;

pub use model::{ContactInfo, Customer, Vendor};
pub use validate::{
    normalize_phone, validate_email, validate_gstin, validate_phone, validate_pincode, FieldError,
    PartyError,
};
