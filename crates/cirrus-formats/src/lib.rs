//! Wire codecs for Cirrus events.
//!
//! Two representations are supported:
//! - JSON text, single events and batches (`JsonFormat`)
//! - the canonical in-memory attribute map (`CanonicalFormat`)
//!
//! The `data`/`data_base64` duality lives entirely in this crate: byte
//! payloads serialize as `data_base64`, and the key is recognized only
//! when decoding JSON text — never by the event model or the canonical
//! map.
//!
#![deny(missing_docs)]

/// Canonical in-memory codec.
pub mod canonical;
/// Codec error taxonomy.
pub mod errors;
/// JSON text codec.
pub mod json;

pub use canonical::CanonicalFormat;
pub use errors::{DecodeError, FormatError};
pub use json::JsonFormat;
