use cirrus_attributes::binary;
use cirrus_core::{AttributeMap, CanonicalValue, CloudEvent, Data, EventFactory, DATA_BASE64_KEY};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::errors::{DecodeError, FormatError};

/// JSON text codec for single events and ordered batches.
///
/// Serialization emits the reference key order (`data`/`data_base64`
/// first, context attributes, then extensions) with explicit `null` for
/// absent optional attributes. Deserialization resolves `data_base64`
/// into byte-typed `data` and routes everything else through the event
/// factory, so defaults and validation behave exactly as direct
/// construction.
pub struct JsonFormat {
    factory: EventFactory,
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormat {
    /// Codec with the default event factory.
    pub fn new() -> Self {
        Self::with_factory(EventFactory::new())
    }

    /// Codec deserializing through the supplied factory.
    pub fn with_factory(factory: EventFactory) -> Self {
        Self { factory }
    }

    /// Serializes one event to JSON text.
    pub fn to_json(&self, event: &CloudEvent) -> Result<String, FormatError> {
        serde_json::to_string(&WireEvent(event)).map_err(|e| FormatError::Serialize(e.to_string()))
    }

    /// Serializes an ordered batch to a JSON array.
    pub fn to_json_batch(&self, events: &[CloudEvent]) -> Result<String, FormatError> {
        let wire: Vec<WireEvent<'_>> = events.iter().map(WireEvent).collect();
        serde_json::to_string(&wire).map_err(|e| FormatError::Serialize(e.to_string()))
    }

    /// Deserializes one event from JSON text.
    pub fn from_json(&self, text: &str) -> Result<CloudEvent, FormatError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DecodeError::Json(e.to_string()))?;
        self.event_from_value(value)
    }

    /// Deserializes an ordered batch.
    ///
    /// Decoding is atomic: the first invalid element rejects the whole
    /// batch, carrying the element index.
    pub fn from_json_batch(&self, text: &str) -> Result<Vec<CloudEvent>, FormatError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DecodeError::Json(e.to_string()))?;
        let Value::Array(items) = value else {
            return Err(DecodeError::NotAnArray.into());
        };

        let mut events = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match self.event_from_value(item) {
                Ok(event) => events.push(event),
                Err(source) => {
                    #[cfg(feature = "telemetry")]
                    tracing::warn!(index, "rejecting batch on invalid element");
                    return Err(FormatError::BatchElement {
                        index,
                        source: Box::new(source),
                    });
                }
            }
        }
        Ok(events)
    }

    fn event_from_value(&self, value: Value) -> Result<CloudEvent, FormatError> {
        let Value::Object(map) = value else {
            return Err(DecodeError::NotAnObject.into());
        };
        let attributes = wire_attributes(map)?;
        Ok(self.factory.create(attributes)?)
    }
}

/// Converts a decoded JSON object into the factory's attribute map,
/// resolving `data_base64` into byte-typed `data`.
fn wire_attributes(map: serde_json::Map<String, Value>) -> Result<AttributeMap, DecodeError> {
    if map.contains_key("data") && map.contains_key(DATA_BASE64_KEY) {
        return Err(DecodeError::DataBase64Conflict);
    }

    let mut attributes = AttributeMap::new();
    for (key, value) in map {
        if key == DATA_BASE64_KEY {
            let Value::String(text) = value else {
                return Err(DecodeError::DataBase64("expected base64 text".to_string()));
            };
            let bytes =
                binary::from_base64(&text).map_err(|e| DecodeError::DataBase64(e.to_string()))?;
            attributes.insert("data".to_string(), CanonicalValue::Bytes(bytes));
            continue;
        }
        if key == "data" {
            let staged = match value {
                Value::Null => CanonicalValue::Null,
                other => CanonicalValue::Structured(other),
            };
            attributes.insert(key, staged);
            continue;
        }
        attributes.insert(key, json_scalar(value));
    }
    Ok(attributes)
}

/// Maps a JSON value onto the raw attribute value space.
fn json_scalar(value: Value) -> CanonicalValue {
    match value {
        Value::Null => CanonicalValue::Null,
        Value::Bool(b) => CanonicalValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => CanonicalValue::Int(i),
            None => CanonicalValue::Float(n.as_f64().unwrap_or(f64::MAX)),
        },
        Value::String(s) => CanonicalValue::Text(s),
        other => CanonicalValue::Structured(other),
    }
}

/// Serialization adapter emitting the reference key order.
struct WireEvent<'a>(&'a CloudEvent);

impl Serialize for WireEvent<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let event = self.0;
        let mut map = serializer.serialize_map(None)?;

        match event.data() {
            Some(Data::Binary(bytes)) => {
                map.serialize_entry(DATA_BASE64_KEY, &binary::to_base64(bytes))?
            }
            Some(Data::Json(value)) => map.serialize_entry("data", value)?,
            None => map.serialize_entry("data", &Value::Null)?,
        }
        map.serialize_entry("source", &event.source().to_string())?;
        map.serialize_entry("id", event.id())?;
        map.serialize_entry("type", event.event_type())?;
        map.serialize_entry("specversion", event.specversion().as_str())?;
        match event.time() {
            Some(time) => map.serialize_entry("time", &time.to_canonical())?,
            None => map.serialize_entry("time", &Value::Null)?,
        }
        match event.subject() {
            Some(subject) => map.serialize_entry("subject", subject)?,
            None => map.serialize_entry("subject", &Value::Null)?,
        }
        match event.datacontenttype() {
            Some(mime) => map.serialize_entry("datacontenttype", mime.as_str())?,
            None => map.serialize_entry("datacontenttype", &Value::Null)?,
        }
        match event.dataschema() {
            Some(schema) => map.serialize_entry("dataschema", &schema.to_string())?,
            None => map.serialize_entry("dataschema", &Value::Null)?,
        }
        for (name, value) in event.extensions() {
            map.serialize_entry(name, &value.to_json_value())?;
        }

        map.end()
    }
}
