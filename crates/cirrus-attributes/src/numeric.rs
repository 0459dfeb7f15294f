use crate::validation::ValidationError;

/// Lower bound for integer attributes.
pub const INTEGER_MIN: i64 = -2_147_483_648;

/// Upper bound for integer attributes.
///
/// One past `i32::MAX`; the interval is kept exactly as the upstream
/// SDKs enforce it, which is why the backing type is `i64`.
pub const INTEGER_MAX: i64 = 2_147_483_648;

/// Integer attribute value within the closed
/// [`INTEGER_MIN`, `INTEGER_MAX`] interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Integer(i64);

impl Integer {
    /// Constructs a validated integer.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < INTEGER_MIN {
            return Err(ValidationError::OutOfBounds {
                field: "Integer",
                value: value.to_string(),
                bound: INTEGER_MIN.to_string(),
            });
        }
        if value > INTEGER_MAX {
            return Err(ValidationError::OutOfBounds {
                field: "Integer",
                value: value.to_string(),
                bound: INTEGER_MAX.to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Parses the canonical decimal text form.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let value: i64 = text.parse().map_err(|_| ValidationError::PatternMismatch {
            field: "Integer",
            value: text.to_string(),
        })?;
        Self::new(value)
    }

    /// Inner value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical text form for boolean attribute values.
pub fn bool_to_canonical(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Parses the canonical boolean text forms.
pub fn bool_from_canonical(text: &str) -> Result<bool, ValidationError> {
    match text {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ValidationError::PatternMismatch {
            field: "Boolean",
            value: text.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_values_within_bounds() {
        assert_eq!(Integer::new(2_312_534).unwrap().get(), 2_312_534);
        assert_eq!(Integer::new(-2_312_534).unwrap().get(), -2_312_534);
        assert!(Integer::new(INTEGER_MIN).is_ok());
    }

    #[test]
    fn rejects_values_outside_bounds() {
        assert!(matches!(
            Integer::new(2_147_483_649),
            Err(ValidationError::OutOfBounds { bound, .. }) if bound == INTEGER_MAX.to_string()
        ));
        assert!(matches!(
            Integer::new(-2_147_483_649),
            Err(ValidationError::OutOfBounds { bound, .. }) if bound == INTEGER_MIN.to_string()
        ));
    }

    #[test]
    fn integer_upper_bound_is_one_past_signed_32bit_max() {
        // 2147483648 does not fit an i32 yet the interval admits it;
        // the boundary is intentional, not an off-by-one to correct.
        assert!(Integer::new(2_147_483_648).is_ok());
        assert_eq!(INTEGER_MAX, i64::from(i32::MAX) + 1);
    }

    #[test]
    fn parses_canonical_decimal_text() {
        assert_eq!(Integer::parse("42").unwrap().get(), 42);
        assert_eq!(Integer::parse("-17").unwrap().get(), -17);
        assert!(Integer::parse("12.5").is_err());
        assert!(Integer::parse("forty-two").is_err());
    }

    #[test]
    fn boolean_canonical_forms() {
        assert_eq!(bool_to_canonical(true), "true");
        assert_eq!(bool_to_canonical(false), "false");
        assert_eq!(bool_from_canonical("true").unwrap(), true);
        assert_eq!(bool_from_canonical("false").unwrap(), false);
        assert!(bool_from_canonical("True").is_err());
        assert!(bool_from_canonical("1").is_err());
    }
}
