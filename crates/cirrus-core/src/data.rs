/// Event payload.
///
/// Byte payloads and structured payloads follow different wire rules:
/// the JSON codec emits bytes under `data_base64` and everything else
/// under `data`.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    /// Raw bytes.
    Binary(Vec<u8>),
    /// Structured, textual, numeric, or boolean payload carried
    /// verbatim.
    Json(serde_json::Value),
}

impl Data {
    /// True when the payload is byte-typed.
    pub fn is_binary(&self) -> bool {
        matches!(self, Data::Binary(_))
    }
}

impl From<Vec<u8>> for Data {
    fn from(bytes: Vec<u8>) -> Self {
        Data::Binary(bytes)
    }
}

impl From<serde_json::Value> for Data {
    fn from(value: serde_json::Value) -> Self {
        Data::Json(value)
    }
}
