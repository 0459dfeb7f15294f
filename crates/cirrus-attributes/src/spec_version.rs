use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// CloudEvents specification versions understood by this workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecVersion {
    /// Version 0.3.
    #[serde(rename = "0.3")]
    V03,
    /// Version 1.0, the default for newly constructed events.
    #[default]
    #[serde(rename = "1.0")]
    V10,
}

impl SpecVersion {
    /// Canonical text form.
    pub fn as_str(self) -> &'static str {
        match self {
            SpecVersion::V03 => "0.3",
            SpecVersion::V10 => "1.0",
        }
    }

    /// Parses the canonical text forms.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "0.3" => Ok(SpecVersion::V03),
            "1.0" => Ok(SpecVersion::V10),
            _ => Err(ValidationError::PatternMismatch {
                field: "SpecVersion",
                value: value.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
