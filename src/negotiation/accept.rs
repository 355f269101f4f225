//! `Accept` header parsing.

use std::cmp::Reverse;
use std::sync::LazyLock;

use regex::Regex;

use super::LIST_SEPARATOR;
use super::quality::{QValue, QualifiedValue};

static MEDIA_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[!#$%&'*+.^_`|~0-9A-Za-z-]+/[!#$%&'*+.^_`|~0-9A-Za-z-]+$")
        .expect("MEDIA_RANGE: invalid regex pattern")
});

static PARAMETER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[!#$%&'*+.^_`|~0-9A-Za-z-]+$").expect("PARAMETER_NAME: invalid regex pattern")
});

static PARAMETER_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:[!#$%&'*+.^_`|~0-9A-Za-z-]+|"[^"]*")$"#)
        .expect("PARAMETER_VALUE: invalid regex pattern")
});

/// Parses an `Accept` header into media ranges with their quality factors,
/// highest quality first.
///
/// Elements that are not a valid media range are skipped. Ranges of equal
/// quality keep the order the client sent them in.
pub fn parse_accept(raw: Option<&str>) -> Vec<QualifiedValue> {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return Vec::new();
    };

    let mut ranges: Vec<QualifiedValue> = LIST_SEPARATOR
        .split(raw)
        .filter_map(|element| {
            let range = parse_media_range(element);
            if range.is_none() {
                tracing::trace!(element, "dropping malformed accept element");
            }
            range
        })
        .collect();

    // Stable: equal qualities stay in header order.
    ranges.sort_by_key(|range| Reverse(range.quality));
    ranges
}

/// Returns the acceptable media ranges of an `Accept` header, ordered by
/// descending quality, without their `q` parameters.
///
/// # Example
///
/// ```
/// use odata_intake::negotiation::accept::extract_accept_headers;
///
/// let ranges = extract_accept_headers(Some("application/json;q=0.5, text/plain;q=0.9, application/xml"));
/// assert_eq!(ranges, ["application/xml", "text/plain", "application/json"]);
/// ```
pub fn extract_accept_headers(raw: Option<&str>) -> Vec<String> {
    parse_accept(raw)
        .into_iter()
        .map(|range| range.value)
        .collect()
}

fn parse_media_range(element: &str) -> Option<QualifiedValue> {
    let element = element.trim();
    let mut parts = element.split(';');

    let range = parts.next()?.trim();
    if !MEDIA_RANGE.is_match(range) {
        return None;
    }

    let mut quality = None;
    for parameter in parts {
        // `q` ends the media range; extension parameters after it are not supported.
        if quality.is_some() {
            return None;
        }

        let (name, value) = parameter.split_once('=')?;
        let (name, value) = (name.trim(), value.trim());

        if name.eq_ignore_ascii_case("q") {
            quality = Some(value.parse::<QValue>().ok()?);
        } else if !PARAMETER_NAME.is_match(name) || !PARAMETER_VALUE.is_match(value) {
            return None;
        }
    }

    let value = match (quality, element.rfind(';')) {
        (Some(_), Some(index)) => element[..index].trim_end(),
        _ => element,
    };

    Some(QualifiedValue::new(value, quality.unwrap_or_default()))
}
