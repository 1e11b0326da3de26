//! Domain error types.
//!
//! These errors represent validation failures of scalar input. They are
//! distinct from data-access and graph-decoding errors.

/// A scalar input was malformed or out of range.
///
/// Always names the offending field so the caller can report it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    field: &'static str,
    reason: String,
}

impl ValidationError {
    /// Create a validation error for `field`.
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    /// The name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Why the field was rejected.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
