use std::collections::BTreeMap;

use cirrus_attributes::{
    AttributeValue, EventString, MimeType, SpecVersion, Timestamp, Uri, UriReference,
};

use crate::data::Data;
use crate::factory::EventBuilder;

/// Attribute names with fixed semantics; every other name is an
/// extension.
pub const FIXED_ATTRIBUTES: &[&str] = &[
    "data",
    "source",
    "id",
    "type",
    "specversion",
    "time",
    "subject",
    "datacontenttype",
    "dataschema",
];

/// Wire-format key for base64-encoded byte payloads.
///
/// Never a constructible attribute: only the JSON text codec may emit
/// or recognize it.
pub const DATA_BASE64_KEY: &str = "data_base64";

/// A CloudEvents event: fixed context attributes plus extensions.
///
/// Instances are built through `EventFactory` or `EventBuilder`, which
/// validate every attribute atomically. After construction only the
/// payload may change, via `set_data`.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudEvent {
    pub(crate) id: EventString,
    pub(crate) source: UriReference,
    pub(crate) ty: EventString,
    pub(crate) specversion: SpecVersion,
    pub(crate) time: Option<Timestamp>,
    pub(crate) subject: Option<EventString>,
    pub(crate) datacontenttype: Option<MimeType>,
    pub(crate) dataschema: Option<Uri>,
    pub(crate) data: Option<Data>,
    pub(crate) extensions: BTreeMap<String, AttributeValue>,
}

impl CloudEvent {
    /// Builder with the default id generator and clock.
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Event identifier, unique per producer and source.
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Context in which the event happened.
    pub fn source(&self) -> &UriReference {
        &self.source
    }

    /// Kind of occurrence the event describes.
    pub fn event_type(&self) -> &str {
        self.ty.as_str()
    }

    /// Specification version the event conforms to.
    pub fn specversion(&self) -> SpecVersion {
        self.specversion
    }

    /// Occurrence timestamp, when known.
    pub fn time(&self) -> Option<&Timestamp> {
        self.time.as_ref()
    }

    /// Subject of the event within the source's context.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_ref().map(EventString::as_str)
    }

    /// Media type of the payload.
    pub fn datacontenttype(&self) -> Option<&MimeType> {
        self.datacontenttype.as_ref()
    }

    /// Schema the payload adheres to.
    pub fn dataschema(&self) -> Option<&Uri> {
        self.dataschema.as_ref()
    }

    /// Event payload.
    pub fn data(&self) -> Option<&Data> {
        self.data.as_ref()
    }

    /// Extension attributes, ordered by name.
    pub fn extensions(&self) -> &BTreeMap<String, AttributeValue> {
        &self.extensions
    }

    /// Looks up one extension attribute.
    pub fn extension(&self, name: &str) -> Option<&AttributeValue> {
        self.extensions.get(name)
    }

    /// Replaces the payload.
    ///
    /// The new payload is encoded on the next serialization; context
    /// attributes stay immutable.
    pub fn set_data(&mut self, data: Option<Data>) {
        self.data = data;
    }
}
