use cirrus_attributes::ValidationErrors;
use cirrus_formats::FormatError;
use thiserror::Error;

/// HTTP binding failures.
///
/// The two `Missing*` variants are preconditions of binary mode: they
/// signal an unusable message shape rather than an invalid attribute
/// value, and are directly actionable by the caller.
#[derive(Debug, Error)]
pub enum BindingError {
    /// Binary-mode serialization needs `datacontenttype` to describe
    /// the body bytes.
    #[error("binary content mode requires the `datacontenttype` attribute")]
    MissingDataContentType,
    /// Binary-mode deserialization needs the `content-type` header.
    #[error("binary content mode requires the `content-type` header")]
    MissingContentType,
    /// A header value failed percent-decoding into UTF-8.
    #[error("header value is not valid percent-encoded UTF-8: {0}")]
    HeaderDecode(String),
    /// Codec failure underneath the binding.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl From<ValidationErrors> for BindingError {
    fn from(errors: ValidationErrors) -> Self {
        BindingError::Format(FormatError::Validation(errors))
    }
}
