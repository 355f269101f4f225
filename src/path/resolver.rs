use url::Url;

use super::segment::{PathSegment, parse_matrix_parameters};
use super::target::RequestTarget;
use crate::error::InterpretError;

/// The decomposed request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathInfo {
    /// Segments owned by the hosting application, decoded.
    pub preceding_segments: Vec<PathSegment>,
    /// Segments routed by the protocol layer, still percent-encoded.
    pub protocol_segments: Vec<PathSegment>,
    /// Base URI of the service, always ending in `/`.
    pub service_root: Url,
    /// The full URI the client requested, query string included.
    pub request_uri: Url,
}

/// Splits the request path at `split_point` and rebuilds the service root
/// and request URIs.
///
/// The first `split_point` segments after the context and servlet paths are
/// preceding segments; they are percent-decoded and may carry matrix
/// parameters. Everything after them is handed on undecoded, and a matrix
/// parameter there rejects the request.
///
/// # Errors
///
/// - [`InterpretError::UrlTooShort`] when the path has fewer than
///   `split_point` segments
/// - [`InterpretError::MatrixParameters`] when a protocol segment contains `;`
/// - [`InterpretError::Uri`] when scheme, host and port do not form a URI
pub fn resolve_path_info(
    target: &RequestTarget,
    split_point: usize,
) -> Result<PathInfo, InterpretError> {
    let logical_path = target.logical_path().trim_start_matches('/');
    let segments: Vec<&str> = logical_path.split('/').collect();

    let (preceding, protocol) = if split_point == 0 {
        (&segments[..0], &segments[..])
    } else {
        if segments.len() < split_point {
            tracing::debug!(
                path = %target.request_path,
                segments = segments.len(),
                required = split_point,
                "path shorter than preceding prefix"
            );
            return Err(InterpretError::UrlTooShort {
                segments: segments.len(),
                required: split_point,
            });
        }
        segments.split_at(split_point)
    };

    let preceding_segments: Vec<PathSegment> =
        preceding.iter().map(|raw| PathSegment::decode(raw)).collect();

    let protocol_segments = protocol
        .iter()
        .map(|raw| protocol_segment(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let service_root = build_service_root(target, &preceding_segments)?;
    let request_uri = build_request_uri(target)?;

    tracing::debug!(
        service_root = %service_root,
        preceding = preceding_segments.len(),
        protocol = protocol_segments.len(),
        "resolved path info"
    );

    Ok(PathInfo {
        preceding_segments,
        protocol_segments,
        service_root,
        request_uri,
    })
}

/// Protocol segments are decoded later by the URI parser and may not carry
/// matrix parameters.
fn protocol_segment(raw: &str) -> Result<PathSegment, InterpretError> {
    match raw.split_once(';') {
        None => Ok(PathSegment::new(raw)),
        Some((path, parameters)) => {
            let names: Vec<String> = parse_matrix_parameters(parameters).into_keys().collect();
            tracing::debug!(path, names = ?names, "matrix parameters on protocol segment");
            Err(InterpretError::MatrixParameters {
                names,
                path: path.to_string(),
            })
        }
    }
}

fn build_service_root(
    target: &RequestTarget,
    preceding_segments: &[PathSegment],
) -> Result<Url, InterpretError> {
    let mut path = format!("{}{}", target.context_path, target.servlet_path);
    for segment in preceding_segments {
        path.push('/');
        path.push_str(&segment.to_encoded());
    }
    if !path.ends_with('/') {
        path.push('/');
    }

    let mut service_root = target.origin()?;
    service_root.set_path(&path);
    Ok(service_root)
}

fn build_request_uri(target: &RequestTarget) -> Result<Url, InterpretError> {
    let mut request_uri = target.request_url()?;
    if let Some(query) = &target.query_string {
        request_uri.set_query(Some(query));
    }
    Ok(request_uri)
}

/// Where to send a request that addresses the mount point itself without a
/// trailing slash.
///
/// Returns `context path + servlet path + "/"` when nothing follows the
/// servlet path, `None` otherwise.
///
/// # Example
///
/// ```
/// use odata_intake::path::resolver::trailing_slash_redirect;
/// use odata_intake::path::target::RequestTarget;
///
/// let target = RequestTarget {
///     scheme: "http".into(),
///     server_name: "localhost".into(),
///     server_port: 8080,
///     context_path: "/context-path".into(),
///     servlet_path: "/servlet-path".into(),
///     request_path: "/context-path/servlet-path".into(),
///     query_string: None,
/// };
/// assert_eq!(trailing_slash_redirect(&target).as_deref(), Some("/context-path/servlet-path/"));
/// ```
pub fn trailing_slash_redirect(target: &RequestTarget) -> Option<String> {
    if target.logical_path().is_empty() {
        Some(format!("{}{}/", target.context_path, target.servlet_path))
    } else {
        None
    }
}
