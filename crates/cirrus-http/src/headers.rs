use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::errors::BindingError;

/// ASCII characters escaped in binary-mode header values: controls,
/// space, double quote, and the escape character itself. Bytes outside
/// ASCII are always escaped.
const HEADER_ESCAPES: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'%');

/// Percent-encodes a header value; printable ASCII other than the
/// escape set passes through unchanged.
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, HEADER_ESCAPES).to_string()
}

/// Percent-decodes a header value.
///
/// The decoded bytes must form valid UTF-8; malformed sequences are a
/// hard error, never replaced with substitution characters.
pub fn decode(value: &str) -> Result<String, BindingError> {
    percent_decode_str(value)
        .decode_utf8()
        .map(|cow| cow.into_owned())
        .map_err(|err| BindingError::HeaderDecode(err.to_string()))
}
