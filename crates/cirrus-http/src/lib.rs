//! HTTP protocol binding for Cirrus events.
//!
//! Two content modes are supported:
//! - structured: the whole event (batch or single) travels as one JSON
//!   body under a `application/cloudevents+json` content type
//! - binary: context attributes travel as percent-encoded `ce-*`
//!   headers and the payload is the raw body
//!
//! Only message-shape conversion lives here; socket I/O, delivery, and
//! retries are the caller's concern.
//!
#![deny(missing_docs)]

/// Structured and binary content mode conversion.
pub mod binding;
/// Binding error taxonomy.
pub mod errors;
/// Percent-encoding codec for header values.
pub mod headers;

pub use binding::{
    HttpBinding, HttpComponents, STRUCTURED_BATCH_CONTENT_TYPE, STRUCTURED_CONTENT_TYPE,
};
pub use errors::BindingError;
