use std::fmt;

use thiserror::Error;

/// Validation errors for attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Type name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a numeric value violates one of its bounds.
    #[error("{field} ({value}) violates bound {bound}")]
    OutOfBounds {
        /// Type name that is out of bounds.
        field: &'static str,
        /// Offending value.
        value: String,
        /// The bound that was violated.
        bound: String,
    },
    /// When a string contains a code point excluded by the type system.
    #[error("{field} contains excluded code point U+{code_point:04X}")]
    ExcludedCodePoint {
        /// Type name that failed validation.
        field: &'static str,
        /// The excluded Unicode code point.
        code_point: u32,
    },
    /// When an absolute URI has no scheme.
    #[error("absolute URI ('{value}') has no scheme")]
    MissingScheme {
        /// Offending value.
        value: String,
    },
    /// When base64 text cannot be decoded.
    #[error("invalid base64: {reason}")]
    InvalidBase64 {
        /// Decoder failure description.
        reason: String,
    },
    /// When a timestamp cannot be parsed.
    #[error("invalid timestamp ('{value}')")]
    InvalidTimestamp {
        /// Offending value.
        value: String,
    },
    /// When an input has a shape the target attribute cannot accept.
    #[error("{field} does not accept {found} input")]
    UnsupportedType {
        /// Type name of the target attribute.
        field: &'static str,
        /// Shape of the rejected input.
        found: &'static str,
    },
    /// When a required attribute is absent.
    #[error("required attribute is missing")]
    Missing,
    /// When a required attribute is explicitly null.
    #[error("required attribute must not be null")]
    Null,
    /// When an attribute name is reserved for the wire format.
    #[error("attribute name is reserved for the wire format")]
    Reserved,
}

/// A single attribute violation recorded during event construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Attribute name the violation applies to.
    pub attribute: String,
    /// Underlying validation error.
    pub error: ValidationError,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.attribute, self.error)
    }
}

/// Aggregate of attribute violations from one construction attempt.
///
/// Construction is all-or-nothing: every attribute is validated and all
/// failures are reported together rather than stopping at the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    /// Empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate holding a single violation.
    pub fn single(attribute: impl Into<String>, error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.push(attribute, error);
        errors
    }

    /// Records a violation for the named attribute.
    pub fn push(&mut self, attribute: impl Into<String>, error: ValidationError) {
        self.violations.push(Violation {
            attribute: attribute.into(),
            error,
        });
    }

    /// True when no violation has been recorded.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Recorded violations, in attribute-processing order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} invalid attribute(s): ", self.violations.len())?;
        for (idx, violation) in self.violations.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
