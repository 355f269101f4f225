//! Failures that reject a whole request.
//!
//! Malformed tokens inside `Accept` or `Accept-Language` are never errors;
//! they are dropped by the negotiation parsers.

use crate::http::status::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum InterpretError {
    /// A non-empty `Content-Type` that is not `type/subtype[;param=value]*`.
    #[error("unsupported content type `{content_type}`")]
    UnsupportedMediaType { content_type: String },

    /// The path has fewer segments than the configured preceding prefix.
    #[error("URL too short: {segments} path segment(s), at least {required} required")]
    UrlTooShort { segments: usize, required: usize },

    /// Matrix parameters are not allowed on protocol path segments.
    ///
    /// `names` is sorted and holds each name once, whatever order and
    /// repetition the segment used.
    #[error("matrix parameter(s) {} not supported on path segment `{path}`", .names.join(", "))]
    MatrixParameters { names: Vec<String>, path: String },

    #[error("could not build URI: {0}")]
    Uri(#[from] url::ParseError),
}

impl InterpretError {
    /// The status the transport boundary should answer with.
    pub fn status(&self) -> StatusCode {
        match self {
            InterpretError::UnsupportedMediaType { .. } => StatusCode::UnsupportedMediaType,
            InterpretError::UrlTooShort { .. } => StatusCode::BadRequest,
            InterpretError::MatrixParameters { .. } => StatusCode::NotFound,
            InterpretError::Uri(_) => StatusCode::InternalServerError,
        }
    }
}
