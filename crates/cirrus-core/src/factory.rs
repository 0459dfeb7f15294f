use std::collections::BTreeMap;
use std::sync::Arc;

use cirrus_attributes::{
    AttributeValue, EventString, Integer, MimeType, SpecVersion, Timestamp, Uri, UriReference,
    ValidationError, ValidationErrors,
};
use uuid::Uuid;

use crate::data::Data;
use crate::event::{CloudEvent, DATA_BASE64_KEY};
use crate::value::CanonicalValue;

/// Raw attribute mapping accepted by the factory, ordered by name.
pub type AttributeMap = BTreeMap<String, CanonicalValue>;

type IdSource = Arc<dyn Fn() -> String + Send + Sync>;
type Clock = Arc<dyn Fn() -> Timestamp + Send + Sync>;

/// Builds validated events, applying defaults for absent attributes.
///
/// Defaults: a fresh UUID v4 for `id`, the current instant for `time`,
/// version 1.0 for `specversion`. The id generator and clock are
/// injectable for deterministic tests. Defaults apply only when the
/// attribute is absent; an explicit null on a mandatory attribute is a
/// violation, not a request for the default.
#[derive(Clone)]
pub struct EventFactory {
    id_source: IdSource,
    clock: Clock,
}

impl Default for EventFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EventFactory {
    /// Factory with the default id generator and clock.
    pub fn new() -> Self {
        Self {
            id_source: Arc::new(|| Uuid::new_v4().to_string()),
            clock: Arc::new(Timestamp::now),
        }
    }

    /// Replaces the id generator.
    pub fn with_id_source(mut self, id_source: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.id_source = Arc::new(id_source);
        self
    }

    /// Replaces the clock.
    pub fn with_clock(mut self, clock: impl Fn() -> Timestamp + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Validates the supplied attributes and builds an event.
    ///
    /// Every attribute is validated and all violations are reported
    /// together; nothing is constructed on failure.
    pub fn create(&self, mut attributes: AttributeMap) -> Result<CloudEvent, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if attributes.remove(DATA_BASE64_KEY).is_some() {
            errors.push(DATA_BASE64_KEY, ValidationError::Reserved);
        }

        let id = match attributes.remove("id") {
            None => EventString::parse((self.id_source)())
                .map_err(|e| errors.push("id", e))
                .ok(),
            Some(CanonicalValue::Null) => {
                errors.push("id", ValidationError::Null);
                None
            }
            Some(CanonicalValue::Text(s)) => EventString::parse(s)
                .map_err(|e| errors.push("id", e))
                .ok(),
            Some(other) => {
                errors.push("id", unsupported("String", &other));
                None
            }
        };

        let source = match attributes.remove("source") {
            None => {
                errors.push("source", ValidationError::Missing);
                None
            }
            Some(CanonicalValue::Null) => {
                errors.push("source", ValidationError::Null);
                None
            }
            Some(CanonicalValue::Text(s)) => UriReference::parse(s)
                .map_err(|e| errors.push("source", e))
                .ok(),
            Some(other) => {
                errors.push("source", unsupported("URIReference", &other));
                None
            }
        };

        let ty = match attributes.remove("type") {
            None => {
                errors.push("type", ValidationError::Missing);
                None
            }
            Some(CanonicalValue::Null) => {
                errors.push("type", ValidationError::Null);
                None
            }
            Some(CanonicalValue::Text(s)) => EventString::parse(s)
                .map_err(|e| errors.push("type", e))
                .ok(),
            Some(other) => {
                errors.push("type", unsupported("String", &other));
                None
            }
        };

        let specversion = match attributes.remove("specversion") {
            None => Some(SpecVersion::default()),
            Some(CanonicalValue::Null) => {
                errors.push("specversion", ValidationError::Null);
                None
            }
            Some(CanonicalValue::Text(s)) => SpecVersion::parse(&s)
                .map_err(|e| errors.push("specversion", e))
                .ok(),
            Some(other) => {
                errors.push("specversion", unsupported("SpecVersion", &other));
                None
            }
        };

        let time = match attributes.remove("time") {
            None => Some((self.clock)()),
            Some(CanonicalValue::Null) => None,
            Some(CanonicalValue::Text(s)) => Timestamp::parse(&s)
                .map_err(|e| errors.push("time", e))
                .ok(),
            Some(CanonicalValue::Timestamp(ts)) => Some(ts),
            Some(other) => {
                errors.push("time", unsupported("Timestamp", &other));
                None
            }
        };

        let subject = match attributes.remove("subject") {
            None | Some(CanonicalValue::Null) => None,
            Some(CanonicalValue::Text(s)) => EventString::parse(s)
                .map_err(|e| errors.push("subject", e))
                .ok(),
            Some(other) => {
                errors.push("subject", unsupported("String", &other));
                None
            }
        };

        let datacontenttype = match attributes.remove("datacontenttype") {
            None | Some(CanonicalValue::Null) => None,
            Some(CanonicalValue::Text(s)) => MimeType::parse(s)
                .map_err(|e| errors.push("datacontenttype", e))
                .ok(),
            Some(other) => {
                errors.push("datacontenttype", unsupported("MimeType", &other));
                None
            }
        };

        let dataschema = match attributes.remove("dataschema") {
            None | Some(CanonicalValue::Null) => None,
            Some(CanonicalValue::Text(s)) => Uri::parse(s)
                .map_err(|e| errors.push("dataschema", e))
                .ok(),
            Some(other) => {
                errors.push("dataschema", unsupported("URI", &other));
                None
            }
        };

        let data = match attributes.remove("data") {
            None | Some(CanonicalValue::Null) => None,
            Some(CanonicalValue::Bytes(bytes)) => Some(Data::Binary(bytes)),
            Some(CanonicalValue::Bool(b)) => Some(Data::Json(b.into())),
            Some(CanonicalValue::Int(i)) => Some(Data::Json(i.into())),
            Some(CanonicalValue::Float(x)) => match serde_json::Number::from_f64(x) {
                Some(n) => Some(Data::Json(n.into())),
                None => {
                    errors.push(
                        "data",
                        ValidationError::UnsupportedType {
                            field: "data",
                            found: "non-finite float",
                        },
                    );
                    None
                }
            },
            Some(CanonicalValue::Text(s)) => Some(Data::Json(s.into())),
            Some(CanonicalValue::Timestamp(ts)) => Some(Data::Json(ts.to_canonical().into())),
            Some(CanonicalValue::Structured(value)) => Some(Data::Json(value)),
        };

        let mut extensions = BTreeMap::new();
        for (name, value) in attributes {
            match extension_value(value) {
                Ok(validated) => {
                    extensions.insert(name, validated);
                }
                Err(error) => errors.push(name, error),
            }
        }

        match (id, source, ty, specversion) {
            (Some(id), Some(source), Some(ty), Some(specversion)) if errors.is_empty() => {
                Ok(CloudEvent {
                    id,
                    source,
                    ty,
                    specversion,
                    time,
                    subject,
                    datacontenttype,
                    dataschema,
                    data,
                    extensions,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Validates one extension attribute value.
///
/// Extensions are restricted to the scalar attribute types; structured
/// values, floats, and explicit nulls are violations.
fn extension_value(value: CanonicalValue) -> Result<AttributeValue, ValidationError> {
    match value {
        CanonicalValue::Null => Err(ValidationError::Null),
        CanonicalValue::Bool(b) => Ok(AttributeValue::Boolean(b)),
        CanonicalValue::Int(i) => Integer::new(i).map(AttributeValue::Integer),
        CanonicalValue::Text(s) => EventString::parse(s).map(AttributeValue::String),
        CanonicalValue::Bytes(bytes) => Ok(AttributeValue::Binary(bytes)),
        CanonicalValue::Timestamp(ts) => Ok(AttributeValue::Timestamp(ts)),
        other @ (CanonicalValue::Float(_) | CanonicalValue::Structured(_)) => {
            Err(unsupported("extension", &other))
        }
    }
}

fn unsupported(field: &'static str, value: &CanonicalValue) -> ValidationError {
    ValidationError::UnsupportedType {
        field,
        found: value.kind(),
    }
}

/// Convenience builder over the factory.
///
/// Setters stage raw values; `build` runs the same validation and
/// default pass as `EventFactory::create`.
pub struct EventBuilder {
    attributes: AttributeMap,
    factory: EventFactory,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBuilder {
    /// Builder with the default factory.
    pub fn new() -> Self {
        Self::with_factory(EventFactory::new())
    }

    /// Builder running construction through the supplied factory.
    pub fn with_factory(factory: EventFactory) -> Self {
        Self {
            attributes: AttributeMap::new(),
            factory,
        }
    }

    /// Stages any attribute by name; later calls replace earlier ones.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<CanonicalValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Stages the `type` attribute.
    pub fn event_type(self, value: impl Into<String>) -> Self {
        self.attribute("type", value.into())
    }

    /// Stages the `source` attribute.
    pub fn source(self, value: impl Into<String>) -> Self {
        self.attribute("source", value.into())
    }

    /// Stages the `id` attribute.
    pub fn id(self, value: impl Into<String>) -> Self {
        self.attribute("id", value.into())
    }

    /// Stages the `specversion` attribute.
    pub fn specversion(self, value: SpecVersion) -> Self {
        self.attribute("specversion", value.as_str())
    }

    /// Stages the `subject` attribute.
    pub fn subject(self, value: impl Into<String>) -> Self {
        self.attribute("subject", value.into())
    }

    /// Stages the `datacontenttype` attribute.
    pub fn datacontenttype(self, value: impl Into<String>) -> Self {
        self.attribute("datacontenttype", value.into())
    }

    /// Stages the `dataschema` attribute.
    pub fn dataschema(self, value: impl Into<String>) -> Self {
        self.attribute("dataschema", value.into())
    }

    /// Stages the `time` attribute.
    pub fn time(self, value: impl Into<CanonicalValue>) -> Self {
        self.attribute("time", value)
    }

    /// Stages the `data` attribute.
    pub fn data(self, value: impl Into<CanonicalValue>) -> Self {
        self.attribute("data", value)
    }

    /// Runs validation and builds the event.
    pub fn build(self) -> Result<CloudEvent, ValidationErrors> {
        self.factory.create(self.attributes)
    }
}
