//! Validated CloudEvents attribute value types.
//!
//! Every context attribute the event model stores is represented here as a
//! value type with a fallible constructor and a canonical serialization,
//! independent of the event record itself. The codec and binding crates
//! reuse the same canonical forms for JSON text and HTTP header values.
//!
#![deny(missing_docs)]

/// Base64 helpers for byte-typed attribute values.
pub mod binary;
/// Integer bounds and boolean canonical forms.
pub mod numeric;
/// Specification version enumeration.
pub mod spec_version;
/// Unicode string and media type attributes.
pub mod strings;
/// Timestamp attribute values.
pub mod timestamp;
/// URI and URI-reference attributes.
pub mod uri;
/// Validated scalar attribute values.
pub mod value;
/// Validation error taxonomy.
pub mod validation;

pub use numeric::{Integer, INTEGER_MAX, INTEGER_MIN};
pub use spec_version::SpecVersion;
pub use strings::{EventString, MimeType};
pub use timestamp::Timestamp;
pub use uri::{Uri, UriReference};
pub use value::AttributeValue;
pub use validation::{ValidationError, ValidationErrors, Violation};
