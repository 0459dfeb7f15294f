use std::collections::BTreeMap;

use cirrus_core::{AttributeMap, CanonicalValue, CloudEvent, Data, EventFactory};
use cirrus_formats::{FormatError, JsonFormat};
use serde_json::Value;

use crate::errors::BindingError;
use crate::headers;

/// Content type announced for structured-mode single events.
pub const STRUCTURED_CONTENT_TYPE: &str = "application/cloudevents+json; charset=UTF-8";

/// Content type announced for structured-mode batches.
pub const STRUCTURED_BATCH_CONTENT_TYPE: &str = "application/cloudevents-batch+json; charset=UTF-8";

/// Header name prefix for context attributes in binary mode.
const CE_PREFIX: &str = "ce-";

/// Header map plus optional raw body, the shape of a binary-mode
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpComponents {
    /// HTTP headers; binary mode uses lowercase names.
    pub headers: BTreeMap<String, String>,
    /// Raw body bytes, present when the event carries data.
    pub body: Option<Vec<u8>>,
}

/// Maps events onto HTTP messages in structured and binary content
/// modes.
///
/// Batches exist in structured mode only; the binary mode of the
/// binding specification has no batch form.
pub struct HttpBinding {
    json: JsonFormat,
    factory: EventFactory,
}

impl Default for HttpBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpBinding {
    /// Binding with the default event factory.
    pub fn new() -> Self {
        Self::with_factory(EventFactory::new())
    }

    /// Binding deserializing through the supplied factory.
    pub fn with_factory(factory: EventFactory) -> Self {
        Self {
            json: JsonFormat::with_factory(factory.clone()),
            factory,
        }
    }

    /// Structured mode: one content-type header plus the JSON body.
    pub fn to_structured(
        &self,
        event: &CloudEvent,
    ) -> Result<(BTreeMap<String, String>, String), BindingError> {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), STRUCTURED_CONTENT_TYPE.to_string());
        let body = self.json.to_json(event)?;
        Ok((headers, body))
    }

    /// Structured mode for an ordered batch.
    pub fn to_structured_batch(
        &self,
        events: &[CloudEvent],
    ) -> Result<(BTreeMap<String, String>, String), BindingError> {
        let mut headers = BTreeMap::new();
        headers.insert(
            "Content-Type".to_string(),
            STRUCTURED_BATCH_CONTENT_TYPE.to_string(),
        );
        let body = self.json.to_json_batch(events)?;
        Ok((headers, body))
    }

    /// Deserializes a structured-mode body.
    pub fn from_structured(&self, body: &str) -> Result<CloudEvent, BindingError> {
        Ok(self.json.from_json(body)?)
    }

    /// Deserializes a structured-mode batch body.
    pub fn from_structured_batch(&self, body: &str) -> Result<Vec<CloudEvent>, BindingError> {
        Ok(self.json.from_json_batch(body)?)
    }

    /// Binary mode: one `ce-` header per context attribute, the payload
    /// as raw body.
    ///
    /// Fails when `datacontenttype` is absent: without it the receiver
    /// cannot interpret the body bytes.
    pub fn to_binary(&self, event: &CloudEvent) -> Result<HttpComponents, BindingError> {
        let content_type = event
            .datacontenttype()
            .ok_or(BindingError::MissingDataContentType)?;

        let mut headers = BTreeMap::new();
        headers.insert("ce-id".to_string(), headers::encode(event.id()));
        headers.insert(
            "ce-source".to_string(),
            headers::encode(&event.source().to_string()),
        );
        headers.insert("ce-type".to_string(), headers::encode(event.event_type()));
        headers.insert(
            "ce-specversion".to_string(),
            headers::encode(event.specversion().as_str()),
        );
        if let Some(time) = event.time() {
            headers.insert("ce-time".to_string(), headers::encode(&time.to_canonical()));
        }
        if let Some(subject) = event.subject() {
            headers.insert("ce-subject".to_string(), headers::encode(subject));
        }
        if let Some(schema) = event.dataschema() {
            headers.insert(
                "ce-dataschema".to_string(),
                headers::encode(&schema.to_string()),
            );
        }
        for (name, value) in event.extensions() {
            headers.insert(
                format!("{CE_PREFIX}{name}"),
                headers::encode(&value.to_canonical_text()),
            );
        }
        headers.insert("content-type".to_string(), content_type.as_str().to_string());

        let body = match event.data() {
            None => None,
            Some(Data::Binary(bytes)) => Some(bytes.clone()),
            Some(Data::Json(Value::String(text))) => Some(text.clone().into_bytes()),
            Some(Data::Json(value)) => Some(
                serde_json::to_vec(value).map_err(|e| FormatError::Serialize(e.to_string()))?,
            ),
        };

        Ok(HttpComponents { headers, body })
    }

    /// Binary mode deserialization.
    ///
    /// Fails when the `content-type` header is absent. All `ce-*`
    /// header values are percent-decoded and routed to the matching
    /// context attribute, or to an extension for unrecognized names; a
    /// non-empty body becomes byte-typed data.
    pub fn from_binary(
        &self,
        headers: &BTreeMap<String, String>,
        body: Option<Vec<u8>>,
    ) -> Result<CloudEvent, BindingError> {
        if !headers
            .keys()
            .any(|name| name.eq_ignore_ascii_case("content-type"))
        {
            return Err(BindingError::MissingContentType);
        }

        let mut attributes = AttributeMap::new();
        for (name, value) in headers {
            if name.eq_ignore_ascii_case("content-type") {
                attributes.insert(
                    "datacontenttype".to_string(),
                    CanonicalValue::Text(value.clone()),
                );
                continue;
            }
            let lowered = name.to_ascii_lowercase();
            if let Some(attribute) = lowered.strip_prefix(CE_PREFIX) {
                let decoded = headers::decode(value).map_err(|err| {
                    #[cfg(feature = "telemetry")]
                    tracing::debug!(header = %name, "header value failed percent-decoding");
                    err
                })?;
                attributes.insert(attribute.to_string(), CanonicalValue::Text(decoded));
            }
        }

        if let Some(bytes) = body {
            if !bytes.is_empty() {
                attributes.insert("data".to_string(), CanonicalValue::Bytes(bytes));
            }
        }

        Ok(self.factory.create(attributes)?)
    }
}
