pub mod error;
pub mod types;

pub use error::ServiceError;
pub use types::{ListParams, ListResult, merge_patch, now_rfc3339};
