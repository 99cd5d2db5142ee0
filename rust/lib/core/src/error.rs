use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Form layers match on these,
// never on the human-readable message string.

/// Stable error code constants.
///
/// Callers should match on `code` from `{"code": "NOT_FOUND", "message": "..."}`.
/// Codes never change; messages may be reworded.
pub mod error_code {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const ALREADY_EXISTS: &str = "ALREADY_EXISTS";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const INTERNAL: &str = "INTERNAL";
}

// ── ServiceError ────────────────────────────────────────────────────

/// Unified error type returned by session and catalog operations.
///
/// Each variant maps to a stable error code (see [`error_code`]). The JSON
/// body handed to the form layer always includes both:
///
/// ```json
/// {"code": "ALREADY_EXISTS", "message": "serials already in batch: AB000002"}
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Referenced item or product does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Serial already present in the working list.
    #[error("{0}")]
    Conflict(String),

    /// Input data is invalid.
    #[error("{0}")]
    Validation(String),

    /// Unexpected internal error (serialization and the like).
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => error_code::NOT_FOUND,
            ServiceError::Conflict(_) => error_code::ALREADY_EXISTS,
            ServiceError::Validation(_) => error_code::VALIDATION_FAILED,
            ServiceError::Internal(_) => error_code::INTERNAL,
        }
    }

    /// Body rendered by the form layer as a field message or notification.
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
        })
    }
}
