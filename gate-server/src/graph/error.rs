//! Graph construction error types.

use crate::domain::InvalidGateCode;

/// Errors raised while decoding gate records into a graph.
///
/// Every variant names the gate whose record could not be decoded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphParseError {
    /// The record's own code is not a valid gate code
    #[error("gate {gate:?}: {source}")]
    InvalidGateCode {
        gate: String,
        #[source]
        source: InvalidGateCode,
    },

    /// The connections field is not a list of `{"id", "hu"}` pairs
    #[error("gate {gate}: malformed connection encoding: {message}")]
    MalformedEncoding { gate: String, message: String },

    /// A connection targets something that is not a valid gate code
    #[error("gate {gate}: invalid connection target {target:?}")]
    InvalidTarget { gate: String, target: String },

    /// A weight could not be parsed as a number
    #[error("gate {gate}: non-numeric weight {value:?} on connection to {target}")]
    NonNumericWeight {
        gate: String,
        target: String,
        value: String,
    },

    /// A weight parsed but is negative, NaN or infinite
    #[error("gate {gate}: weight {value} on connection to {target} must be finite and non-negative")]
    InvalidWeight {
        gate: String,
        target: String,
        value: f64,
    },
}

impl GraphParseError {
    /// The code of the gate whose record failed to decode.
    pub fn gate(&self) -> &str {
        match self {
            GraphParseError::InvalidGateCode { gate, .. }
            | GraphParseError::MalformedEncoding { gate, .. }
            | GraphParseError::InvalidTarget { gate, .. }
            | GraphParseError::NonNumericWeight { gate, .. }
            | GraphParseError::InvalidWeight { gate, .. } => gate,
        }
    }
}
