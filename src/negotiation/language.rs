//! `Accept-Language` header parsing.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::LIST_SEPARATOR;
use super::quality::{QUALITY_FACTOR, QValue};

static LANGUAGE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(\*|[a-z]{{1,8}})(?:-([a-zA-Z]{{1,8}}))?(?:;\s?q=({QUALITY_FACTOR}))?$"
    ))
    .expect("LANGUAGE_RANGE: invalid regex pattern")
});

/// A language range from `Accept-Language`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag {
    /// Primary subtag (e.g. "en"), or "*"
    pub primary: String,
    /// Region subtag, uppercased (e.g. "US")
    pub region: Option<String>,
    /// Quality factor the client attached, 1 when absent
    pub quality: QValue,
}

impl LanguageTag {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            region: None,
            quality: QValue::default(),
        }
    }

    pub fn with_region(primary: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            region: Some(region.into().to_ascii_uppercase()),
            quality: QValue::default(),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.primary == "*"
    }

    fn parse(token: &str) -> Option<Self> {
        let captures = LANGUAGE_RANGE.captures(token)?;
        let quality = match captures.get(3) {
            Some(q) => q.as_str().parse().ok()?,
            None => QValue::default(),
        };

        Some(Self {
            primary: captures[1].to_string(),
            region: captures.get(2).map(|r| r.as_str().to_ascii_uppercase()),
            quality,
        })
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.primary, region),
            None => write!(f, "{}", self.primary),
        }
    }
}

/// Parses an `Accept-Language` header.
///
/// Tags come back in the order the client wrote them. Their quality is
/// recorded on each tag but does not reorder the list. Tokens that are not
/// a `primary[-region][;q=factor]` range are skipped.
///
/// # Example
///
/// ```
/// use odata_intake::negotiation::language::extract_accept_languages;
///
/// let tags: Vec<String> = extract_accept_languages(Some("en-US, fr;q=0.8, de"))
///     .iter()
///     .map(|tag| tag.to_string())
///     .collect();
/// assert_eq!(tags, ["en-US", "fr", "de"]);
/// ```
pub fn extract_accept_languages(raw: Option<&str>) -> Vec<LanguageTag> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    LIST_SEPARATOR
        .split(raw)
        .filter_map(|token| {
            let tag = LanguageTag::parse(token);
            if tag.is_none() && !token.is_empty() {
                tracing::trace!(token, "dropping malformed language range");
            }
            tag
        })
        .collect()
}
