//! Validation error types

use std::fmt;

/// Validation error for domain models and request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty or whitespace only when it shouldn't be
    Empty { field: &'static str },

    /// Required reference field was left unset (zero)
    Missing { field: &'static str },

    /// Numeric field outside its inclusive range
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
        value: i32,
    },

    /// String doesn't match required format (e.g., numeric id)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Request body could not be decoded
    Malformed(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::OutOfRange {
                field,
                min,
                max,
                value,
            } => write!(f, "{} must be between {} and {}, got {}", field, min, max, value),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::Malformed(reason) => write!(f, "malformed request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject empty or whitespace-only strings.
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// Reject an unset (zero) foreign key.
pub fn require_ref(field: &'static str, value: i32) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::Missing { field });
    }
    Ok(())
}

/// Reject a value outside `min..=max`.
pub fn require_range(
    field: &'static str,
    value: i32,
    min: i32,
    max: i32,
) -> Result<(), ValidationError> {
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}

/// Parse an identifier taken from a request path.
///
/// Store keys are positive serials, so anything else can never match a row.
/// Only bare ASCII digits are accepted: no sign, no surrounding whitespace.
pub fn parse_id(field: &'static str, raw: &str) -> Result<i32, ValidationError> {
    let digits_only = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit());
    match raw.parse::<i32>() {
        Ok(id) if digits_only && id > 0 => Ok(id),
        _ => Err(ValidationError::InvalidFormat {
            field,
            reason: "must be a positive integer",
        }),
    }
}
