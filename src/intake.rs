//! Per-request interpretation.
//!
//! [`interpret`] runs every extractor against one parsed request and
//! returns what the dispatching layer needs to route it and pick a
//! response format.

use std::collections::HashMap;

use crate::config::Config;
use crate::error::InterpretError;
use crate::http::headers::HeaderMap;
use crate::http::request::{Method, Request};
use crate::http::status::StatusCode;
use crate::negotiation::{
    LanguageTag, MediaType, extract_accept_headers, extract_accept_languages, extract_content_type,
};
use crate::path::{
    PathInfo, RequestTarget, extract_query_parameters, resolve_path_info, trailing_slash_redirect,
};

/// Everything extracted from a request that is ready for dispatch.
#[derive(Debug, Clone)]
pub struct RequestInfo {
    pub method: Method,
    pub path_info: PathInfo,
    /// Body media type, `application/octet-stream` when not declared
    pub content_type: MediaType,
    /// Acceptable media ranges, highest quality first
    pub accept_headers: Vec<String>,
    /// Acceptable languages, in header order
    pub accept_languages: Vec<LanguageTag>,
    pub query_parameters: HashMap<String, String>,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone)]
pub enum Interpretation {
    /// The mount point was addressed without a trailing slash.
    Redirect { location: String },
    Resolved(Box<RequestInfo>),
}

impl Interpretation {
    pub fn status(&self) -> StatusCode {
        match self {
            Interpretation::Redirect { .. } => StatusCode::TemporaryRedirect,
            Interpretation::Resolved(_) => StatusCode::Ok,
        }
    }
}

/// Interprets `request` against the mount configuration.
///
/// Path problems are reported before header problems, matching the order a
/// router would hit them.
///
/// # Example
///
/// ```
/// use odata_intake::config::Config;
/// use odata_intake::http::request::{Method, RequestBuilder};
/// use odata_intake::intake::{interpret, Interpretation};
///
/// let config = Config { servlet_path: "/svc".into(), ..Config::default() };
/// let request = RequestBuilder::new()
///     .method(Method::GET)
///     .target("/svc/Products?$top=2")
///     .header("Accept", "application/json")
///     .build()
///     .unwrap();
///
/// let Interpretation::Resolved(info) = interpret(&request, &config).unwrap() else {
///     panic!("expected a resolved request");
/// };
/// assert_eq!(info.path_info.protocol_segments[0].path(), "Products");
/// assert_eq!(info.query_parameters["$top"], "2");
/// ```
pub fn interpret(request: &Request, config: &Config) -> Result<Interpretation, InterpretError> {
    let target = RequestTarget::from_request(request, config);

    if let Some(location) = trailing_slash_redirect(&target) {
        tracing::debug!(path = %target.request_path, location = %location, "redirecting to service root");
        return Ok(Interpretation::Redirect { location });
    }

    let path_info = resolve_path_info(&target, config.split_point)?;
    let content_type = extract_content_type(request.header("Content-Type"))?;
    let accept_headers = extract_accept_headers(request.headers.combined("Accept").as_deref());
    let accept_languages =
        extract_accept_languages(request.headers.combined("Accept-Language").as_deref());
    let query_parameters = extract_query_parameters(target.query_string.as_deref());

    tracing::debug!(
        method = ?request.method,
        path = %target.request_path,
        content_type = %content_type,
        accept = accept_headers.len(),
        languages = accept_languages.len(),
        "request interpreted"
    );

    Ok(Interpretation::Resolved(Box::new(RequestInfo {
        method: request.method.clone(),
        path_info,
        content_type,
        accept_headers,
        accept_languages,
        query_parameters,
        headers: request.headers.clone(),
    })))
}
