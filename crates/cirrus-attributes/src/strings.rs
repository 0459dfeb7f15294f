use regex::Regex;

use crate::validation::ValidationError;

/// Unicode string attribute honoring the CloudEvents type-system
/// exclusions.
///
/// Rejected code points: control characters (U+0000-U+001F and
/// U+007F-U+009F) and Unicode non-characters (U+FDD0-U+FDEF plus the
/// U+xFFFE/U+xFFFF pair in every plane). The empty string is rejected.
/// Checks run on Unicode scalar values, so astral-plane characters are
/// classified by code point rather than by UTF-16 code unit; unpaired
/// surrogates cannot occur in a Rust `str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventString(String);

impl EventString {
    /// Parses a validated attribute string.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty() {
            return Err(ValidationError::PatternMismatch {
                field: "String",
                value: s,
            });
        }
        if let Some(c) = s.chars().find(|c| is_excluded(*c)) {
            return Err(ValidationError::ExcludedCodePoint {
                field: "String",
                code_point: c as u32,
            });
        }
        Ok(Self(s))
    }

    /// Validated string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for EventString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// True for code points the CloudEvents type system excludes.
fn is_excluded(c: char) -> bool {
    let cp = c as u32;
    matches!(cp, 0x0000..=0x001F | 0x007F..=0x009F | 0xFDD0..=0xFDEF) || (cp & 0xFFFE) == 0xFFFE
}

/// Media type constrained to the IANA-registered top-level categories
/// (pattern: `<top-level>/<subtype>`, optional parameters after `;`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MimeType(String);

const MIME_PATTERN: &str = r"^(application|audio|example|font|haptics|image|message|model|multipart|text|video)/[-+.\w]+(;.*)?$";

impl MimeType {
    /// Parses a validated media type.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !Regex::new(MIME_PATTERN).expect("invalid regex").is_match(&s) {
            return Err(ValidationError::PatternMismatch {
                field: "MimeType",
                value: s,
            });
        }
        Ok(Self(s))
    }

    /// Validated media type text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MimeType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
