use cirrus_attributes::{AttributeValue, Timestamp};

/// Raw attribute value prior to validation.
///
/// This is both the input shape for the event factory and the output
/// shape of the canonical codec: native-typed, with bytes kept as bytes
/// rather than base64 text.
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalValue {
    /// Explicit null.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar; only the `data` attribute accepts it.
    Float(f64),
    /// Text scalar.
    Text(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// Parsed timestamp.
    Timestamp(Timestamp),
    /// Structured JSON; only the `data` attribute accepts it.
    Structured(serde_json::Value),
}

impl CanonicalValue {
    /// Shape name used in validation messages.
    pub fn kind(&self) -> &'static str {
        match self {
            CanonicalValue::Null => "null",
            CanonicalValue::Bool(_) => "boolean",
            CanonicalValue::Int(_) => "integer",
            CanonicalValue::Float(_) => "float",
            CanonicalValue::Text(_) => "text",
            CanonicalValue::Bytes(_) => "bytes",
            CanonicalValue::Timestamp(_) => "timestamp",
            CanonicalValue::Structured(_) => "structured",
        }
    }
}

impl From<&str> for CanonicalValue {
    fn from(value: &str) -> Self {
        CanonicalValue::Text(value.to_string())
    }
}

impl From<String> for CanonicalValue {
    fn from(value: String) -> Self {
        CanonicalValue::Text(value)
    }
}

impl From<bool> for CanonicalValue {
    fn from(value: bool) -> Self {
        CanonicalValue::Bool(value)
    }
}

impl From<i64> for CanonicalValue {
    fn from(value: i64) -> Self {
        CanonicalValue::Int(value)
    }
}

impl From<Vec<u8>> for CanonicalValue {
    fn from(value: Vec<u8>) -> Self {
        CanonicalValue::Bytes(value)
    }
}

impl From<Timestamp> for CanonicalValue {
    fn from(value: Timestamp) -> Self {
        CanonicalValue::Timestamp(value)
    }
}

impl From<serde_json::Value> for CanonicalValue {
    fn from(value: serde_json::Value) -> Self {
        CanonicalValue::Structured(value)
    }
}

impl From<&AttributeValue> for CanonicalValue {
    fn from(value: &AttributeValue) -> Self {
        match value {
            AttributeValue::Boolean(b) => CanonicalValue::Bool(*b),
            AttributeValue::Integer(i) => CanonicalValue::Int(i.get()),
            AttributeValue::String(s) => CanonicalValue::Text(s.as_str().to_string()),
            AttributeValue::Binary(bytes) => CanonicalValue::Bytes(bytes.clone()),
            AttributeValue::Timestamp(ts) => CanonicalValue::Timestamp(*ts),
        }
    }
}
