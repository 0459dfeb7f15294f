use crate::binary;
use crate::numeric::{bool_to_canonical, Integer};
use crate::strings::EventString;
use crate::timestamp::Timestamp;

/// Validated scalar attribute value.
///
/// Extension attributes and binary-mode header values are restricted to
/// this set; the CloudEvents type system has no structured attribute
/// types.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Boolean attribute.
    Boolean(bool),
    /// Integer attribute within the CloudEvents bounds.
    Integer(Integer),
    /// Unicode string attribute.
    String(EventString),
    /// Byte-sequence attribute.
    Binary(Vec<u8>),
    /// Timestamp attribute.
    Timestamp(Timestamp),
}

impl AttributeValue {
    /// Canonical text form, as carried in HTTP headers.
    pub fn to_canonical_text(&self) -> String {
        match self {
            AttributeValue::Boolean(b) => bool_to_canonical(*b).to_string(),
            AttributeValue::Integer(i) => i.to_string(),
            AttributeValue::String(s) => s.as_str().to_string(),
            AttributeValue::Binary(bytes) => binary::to_base64(bytes),
            AttributeValue::Timestamp(ts) => ts.to_canonical(),
        }
    }

    /// Native JSON projection, as carried in the JSON wire format.
    ///
    /// Booleans and integers stay native JSON scalars; bytes and
    /// timestamps become their canonical text.
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            AttributeValue::Boolean(b) => (*b).into(),
            AttributeValue::Integer(i) => i.get().into(),
            AttributeValue::String(s) => s.as_str().into(),
            AttributeValue::Binary(bytes) => binary::to_base64(bytes).into(),
            AttributeValue::Timestamp(ts) => ts.to_canonical().into(),
        }
    }
}
