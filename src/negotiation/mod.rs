//! Content negotiation headers.
//!
//! - **`content_type`**: `Content-Type` validation into a [`MediaType`]
//! - **`accept`**: `Accept` media ranges, ordered by quality
//! - **`language`**: `Accept-Language` tags, in header order
//! - **`quality`**: the `q` factor grammar shared by both
//!
//! Malformed list elements are dropped rather than failing the header; only
//! an unparseable `Content-Type` rejects a request.

use std::sync::LazyLock;

use regex::Regex;

pub mod accept;
pub mod content_type;
pub mod language;
pub mod quality;

pub use accept::extract_accept_headers;
pub use content_type::{MediaType, extract_content_type};
pub use language::{LanguageTag, extract_accept_languages};
pub use quality::{QValue, QualifiedValue};

/// Element separator for list-valued headers: a comma and at most one
/// whitespace character.
pub(crate) static LIST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s?").expect("LIST_SEPARATOR: invalid regex pattern"));
