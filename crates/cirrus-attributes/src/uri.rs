use std::fmt;

use regex::Regex;

use crate::validation::ValidationError;

/// RFC 3986 Appendix B reference grammar, with the scheme restricted to
/// its legal alphabet so scheme-less text such as `1-555-123-4567`
/// parses as a bare path.
const URI_REFERENCE_PATTERN: &str =
    r"(?s)^(?:([A-Za-z][A-Za-z0-9+.\-]*):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$";

/// URI reference split into RFC 3986 components; the scheme is optional,
/// so relative references are accepted.
///
/// Serialization recomposes the reference per RFC 3986 section 5.3.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UriReference {
    scheme: Option<String>,
    authority: Option<String>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl UriReference {
    /// Parses a URI reference into its components.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let re = Regex::new(URI_REFERENCE_PATTERN).expect("invalid regex");
        let caps = re
            .captures(&s)
            .ok_or_else(|| ValidationError::PatternMismatch {
                field: "URIReference",
                value: s.clone(),
            })?;
        Ok(Self {
            scheme: caps.get(1).map(|m| m.as_str().to_string()),
            authority: caps.get(2).map(|m| m.as_str().to_string()),
            path: caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default(),
            query: caps.get(4).map(|m| m.as_str().to_string()),
            fragment: caps.get(5).map(|m| m.as_str().to_string()),
        })
    }

    /// Scheme component, absent for relative references.
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Authority component (host and friends), absent when the reference
    /// has no `//` part.
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// Path component; possibly empty.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query component, without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Fragment component, without the leading `#`.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl fmt::Display for UriReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }
        if let Some(authority) = &self.authority {
            write!(f, "//{authority}")?;
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

/// Absolute URI: a URI reference with a non-empty scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri(UriReference);

impl Uri {
    /// Parses an absolute URI; input without a scheme is rejected.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let reference = UriReference::parse(s.clone())?;
        if reference.scheme().is_none() {
            return Err(ValidationError::MissingScheme { value: s });
        }
        Ok(Self(reference))
    }

    /// The underlying reference components.
    pub fn as_reference(&self) -> &UriReference {
        &self.0
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
