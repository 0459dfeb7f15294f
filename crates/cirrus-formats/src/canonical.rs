use cirrus_attributes::ValidationErrors;
use cirrus_core::{AttributeMap, CanonicalValue, CloudEvent, Data, EventFactory};
use serde_json::Value;

/// Canonical in-memory codec: native-typed attribute maps.
///
/// Unlike the JSON text form, bytes stay bytes and timestamps stay
/// parsed values; `data_base64` never appears on either side.
pub struct CanonicalFormat {
    factory: EventFactory,
}

impl Default for CanonicalFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl CanonicalFormat {
    /// Codec with the default event factory.
    pub fn new() -> Self {
        Self::with_factory(EventFactory::new())
    }

    /// Codec deserializing through the supplied factory.
    pub fn with_factory(factory: EventFactory) -> Self {
        Self { factory }
    }

    /// Projects an event onto the canonical attribute map.
    ///
    /// Absent optional attributes appear as explicit nulls, mirroring
    /// the JSON object shape.
    pub fn to_canonical(&self, event: &CloudEvent) -> AttributeMap {
        let mut map = AttributeMap::new();

        let data = match event.data() {
            None => CanonicalValue::Null,
            Some(Data::Binary(bytes)) => CanonicalValue::Bytes(bytes.clone()),
            Some(Data::Json(value)) => json_native(value),
        };
        map.insert("data".to_string(), data);
        map.insert(
            "source".to_string(),
            CanonicalValue::Text(event.source().to_string()),
        );
        map.insert("id".to_string(), CanonicalValue::Text(event.id().to_string()));
        map.insert(
            "type".to_string(),
            CanonicalValue::Text(event.event_type().to_string()),
        );
        map.insert(
            "specversion".to_string(),
            CanonicalValue::Text(event.specversion().as_str().to_string()),
        );
        map.insert(
            "time".to_string(),
            match event.time() {
                Some(ts) => CanonicalValue::Timestamp(*ts),
                None => CanonicalValue::Null,
            },
        );
        map.insert(
            "subject".to_string(),
            match event.subject() {
                Some(subject) => CanonicalValue::Text(subject.to_string()),
                None => CanonicalValue::Null,
            },
        );
        map.insert(
            "datacontenttype".to_string(),
            match event.datacontenttype() {
                Some(mime) => CanonicalValue::Text(mime.as_str().to_string()),
                None => CanonicalValue::Null,
            },
        );
        map.insert(
            "dataschema".to_string(),
            match event.dataschema() {
                Some(schema) => CanonicalValue::Text(schema.to_string()),
                None => CanonicalValue::Null,
            },
        );
        for (name, value) in event.extensions() {
            map.insert(name.clone(), CanonicalValue::from(value));
        }

        map
    }

    /// Builds an event from a canonical attribute map.
    ///
    /// `data_base64` is not a canonical attribute; supplying it fails
    /// validation, as does any other constraint violation.
    pub fn from_canonical(&self, attributes: AttributeMap) -> Result<CloudEvent, ValidationErrors> {
        self.factory.create(attributes)
    }
}

/// Maps a structured payload onto the native value space: scalar JSON
/// payloads stay scalars in the canonical map.
fn json_native(value: &Value) -> CanonicalValue {
    match value {
        Value::Null => CanonicalValue::Null,
        Value::Bool(b) => CanonicalValue::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => CanonicalValue::Int(i),
            None => CanonicalValue::Float(n.as_f64().unwrap_or(f64::MAX)),
        },
        Value::String(s) => CanonicalValue::Text(s.clone()),
        other => CanonicalValue::Structured(other.clone()),
    }
}
