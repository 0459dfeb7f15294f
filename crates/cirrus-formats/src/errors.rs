use cirrus_attributes::ValidationErrors;
use thiserror::Error;

/// Wire-shape failures detected before attribute validation can begin.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload is not valid JSON text.
    #[error("malformed JSON: {0}")]
    Json(String),
    /// A single-event payload that is not a JSON object.
    #[error("event payload must be a JSON object")]
    NotAnObject,
    /// A batch payload that is not a JSON array.
    #[error("batch payload must be a JSON array")]
    NotAnArray,
    /// An event carrying both `data` and `data_base64`.
    #[error("`data` and `data_base64` are mutually exclusive")]
    DataBase64Conflict,
    /// A `data_base64` value that is not a string or not decodable
    /// base64.
    #[error("invalid `data_base64` payload: {0}")]
    DataBase64(String),
}

/// Codec failures: wire decode problems, attribute validation, or
/// serialization.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Wire-shape failure.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// Attribute validation failure.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// Serializer failure.
    #[error("serialization failed: {0}")]
    Serialize(String),
    /// Failure within one element of a batch; the batch is rejected as
    /// a whole.
    #[error("batch element {index}: {source}")]
    BatchElement {
        /// Zero-based index of the failing element.
        index: usize,
        /// Underlying failure.
        #[source]
        source: Box<FormatError>,
    },
}
