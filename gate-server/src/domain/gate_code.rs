//! Gate code type.

use std::fmt;

/// Longest gate code accepted.
pub const MAX_GATE_CODE_LEN: usize = 8;

/// Error returned when parsing an invalid gate code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid gate code: {reason}")]
pub struct InvalidGateCode {
    reason: &'static str,
}

/// A gate code.
///
/// Codes supplied by callers are 1 to 8 uppercase ASCII letters or digits
/// (e.g. `"ALD"`, `"SOL"`). Codes read from stored gate records are only
/// trimmed and upper-cased, so data with unusual codes still loads. Codes
/// order lexicographically, which is what the route finder uses to break
/// ties between equally cheap candidates.
///
/// # Examples
///
/// ```
/// use gate_server::domain::GateCode;
///
/// let ald = GateCode::parse("ALD").unwrap();
/// assert_eq!(ald.as_str(), "ALD");
///
/// // Lowercase is rejected by `parse`...
/// assert!(GateCode::parse("ald").is_err());
///
/// // ...but accepted by `parse_normalized`
/// assert_eq!(GateCode::parse_normalized(" ald ").unwrap(), ald);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GateCode(String);

impl GateCode {
    /// Parse a gate code from a string.
    ///
    /// The input must be 1 to 8 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidGateCode> {
        if s.is_empty() {
            return Err(InvalidGateCode {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_GATE_CODE_LEN {
            return Err(InvalidGateCode {
                reason: "must be at most 8 characters",
            });
        }

        if !s
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(InvalidGateCode {
                reason: "must be uppercase ASCII letters A-Z or digits",
            });
        }

        Ok(GateCode(s.to_string()))
    }

    /// Parse a gate code after trimming whitespace and upper-casing.
    ///
    /// This is the normalization applied to user-supplied codes before lookup.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidGateCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Accept a code as it appears in stored gate data.
    ///
    /// Trims and upper-cases ASCII letters but keeps every other character,
    /// so `"sol"` becomes `SOL` and `"GATE-7"` is kept as is. Only a blank
    /// code is rejected.
    pub fn from_stored(s: &str) -> Result<Self, InvalidGateCode> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InvalidGateCode {
                reason: "must not be empty",
            });
        }
        Ok(GateCode(s.to_ascii_uppercase()))
    }

    /// Returns the gate code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for GateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GateCode({})", self.0)
    }
}

impl fmt::Display for GateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::Serialize for GateCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
