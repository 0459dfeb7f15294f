//! CloudEvent record and construction.
//!
//! This crate provides:
//! - The `CloudEvent` record: fixed context attributes plus an ordered
//!   map of extension attributes
//! - The `Data` payload type with its byte/structured duality
//! - `EventFactory`: atomic, all-or-nothing construction with defaults
//!   for `id`, `time`, and `specversion`, over injectable id and clock
//!   sources
//!
//! Core invariants:
//! - `id`, `source`, `type`, `specversion` are mandatory; explicit null
//!   never triggers a default
//! - `data_base64` is a wire-format key, never a constructible attribute
//! - Events compare equal iff every attribute, extension, and the
//!   payload compare equal
//!
#![deny(missing_docs)]

/// Event payload type.
pub mod data;
/// The CloudEvent record.
pub mod event;
/// Event construction: factory, builder, defaults, validation.
pub mod factory;
/// Raw pre-validation attribute values.
pub mod value;

pub use data::Data;
pub use event::{CloudEvent, DATA_BASE64_KEY, FIXED_ATTRIBUTES};
pub use factory::{AttributeMap, EventBuilder, EventFactory};
pub use value::CanonicalValue;
