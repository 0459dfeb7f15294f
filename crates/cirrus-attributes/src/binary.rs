use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::validation::ValidationError;

/// Encodes bytes as standard padded base64 text, the canonical wire
/// form for byte-typed attribute values.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard base64 text into bytes.
///
/// Text that is not valid base64 is a validation failure, never passed
/// through as raw bytes.
pub fn from_base64(text: &str) -> Result<Vec<u8>, ValidationError> {
    STANDARD
        .decode(text)
        .map_err(|err| ValidationError::InvalidBase64 {
            reason: err.to_string(),
        })
}
