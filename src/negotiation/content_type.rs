use std::fmt;
use std::str::FromStr;

use mediatype::{MediaTypeBuf, ReadParams};

use crate::error::InterpretError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid media type `{0}`")]
pub struct InvalidMediaType(pub String);

/// A parsed `Content-Type` value.
///
/// Type and subtype are kept lowercase. Parameters keep the order and the
/// spelling they were given in; lookups by name ignore case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    primary_type: String,
    subtype: String,
    parameters: Vec<(String, String)>,
}

impl MediaType {
    pub fn new(primary_type: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            primary_type: primary_type.into().to_ascii_lowercase(),
            subtype: subtype.into().to_ascii_lowercase(),
            parameters: Vec::new(),
        }
    }

    /// `application/octet-stream`, the type assumed for bodies of unknown type.
    pub fn octet_stream() -> Self {
        Self::new("application", "octet-stream")
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push((name.into(), value.into()));
        self
    }

    pub fn primary_type(&self) -> &str {
        &self.primary_type
    }

    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Looks up a parameter value by case-insensitive name.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn charset(&self) -> Option<&str> {
        self.parameter("charset")
    }

}

impl Default for MediaType {
    fn default() -> Self {
        Self::octet_stream()
    }
}

impl FromStr for MediaType {
    type Err = InvalidMediaType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed =
            MediaTypeBuf::from_str(s.trim()).map_err(|_| InvalidMediaType(s.to_string()))?;

        // `mediatype` splits structured syntax suffixes (`atom+xml`) off the subtype.
        let subtype = match parsed.suffix() {
            Some(suffix) => format!("{}+{}", parsed.subty().as_str(), suffix.as_str()),
            None => parsed.subty().as_str().to_string(),
        };

        let mut media_type = MediaType::new(parsed.ty().as_str(), subtype);
        for (name, value) in parsed.params() {
            media_type = media_type.with_parameter(name.as_str(), value.as_str());
        }
        Ok(media_type)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.primary_type, self.subtype)?;
        for (name, value) in &self.parameters {
            write!(f, ";{name}={value}")?;
        }
        Ok(())
    }
}

/// Determines the media type of a request body from its `Content-Type`.
///
/// A missing or empty header means `application/octet-stream` (RFC 2616,
/// 7.2.1). Anything else, whitespace-only values included, must parse as
/// `type/subtype[;param=value]*`.
///
/// # Example
///
/// ```
/// use odata_intake::negotiation::content_type::extract_content_type;
///
/// let json = extract_content_type(Some("application/json;charset=utf-8")).unwrap();
/// assert_eq!(json.subtype(), "json");
/// assert_eq!(json.charset(), Some("utf-8"));
///
/// assert_eq!(extract_content_type(None).unwrap().to_string(), "application/octet-stream");
/// assert!(extract_content_type(Some("bogus-no-slash")).is_err());
/// ```
pub fn extract_content_type(raw: Option<&str>) -> Result<MediaType, InterpretError> {
    match raw {
        None | Some("") => Ok(MediaType::octet_stream()),
        Some(raw) => raw.parse::<MediaType>().map_err(|_| {
            tracing::debug!(content_type = raw, "rejecting unparseable content type");
            InterpretError::UnsupportedMediaType {
                content_type: raw.to_string(),
            }
        }),
    }
}
