use url::{Host, Url};

use crate::config::Config;
use crate::http::request::Request;

/// Where a request arrived and which part of its path belongs to whom.
///
/// `context_path` and `servlet_path` are the mount prefix and listener
/// prefix owned by the hosting application; `request_path` is the full,
/// still percent-encoded path from the request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    pub scheme: String,
    pub server_name: String,
    pub server_port: u16,
    pub context_path: String,
    pub servlet_path: String,
    pub request_path: String,
    pub query_string: Option<String>,
}

impl RequestTarget {
    /// Combines a parsed request with the mount configuration.
    ///
    /// Host and port come from the `Host` header when present, otherwise
    /// from the configured server name and port.
    pub fn from_request(request: &Request, config: &Config) -> Self {
        let (server_name, server_port) = request
            .header("Host")
            .and_then(|host| split_host(host, config.server_port))
            .unwrap_or_else(|| (config.server_name.clone(), config.server_port));

        Self {
            scheme: config.scheme.clone(),
            server_name,
            server_port,
            context_path: config.context_path.clone(),
            servlet_path: config.servlet_path.clone(),
            request_path: request.path().to_string(),
            query_string: request.query().map(str::to_string),
        }
    }

    /// The part of the path the application routes on: the request path with
    /// the context path and then the servlet path removed from its front.
    ///
    /// A prefix only matches whole segments, so `/ctx` strips `/ctx/A` but
    /// not `/ctxfoo/A`.
    pub fn logical_path(&self) -> &str {
        let path = strip_mount(&self.request_path, &self.context_path);
        strip_mount(path, &self.servlet_path)
    }

    /// `scheme://host:port/` with an empty path.
    ///
    /// The server name must be a bare host; anything carrying URL delimiters
    /// such as `/`, `?`, `#` or `@` is rejected.
    pub(crate) fn origin(&self) -> Result<Url, url::ParseError> {
        let host = if self.server_name.contains(':') && !self.server_name.starts_with('[') {
            Host::parse(&format!("[{}]", self.server_name))?
        } else {
            Host::parse(&self.server_name)?
        };
        Url::parse(&format!("{}://{}:{}", self.scheme, host, self.server_port))
    }

    /// The URL the client requested, without the query string.
    pub fn request_url(&self) -> Result<Url, url::ParseError> {
        let mut url = self.origin()?;
        url.set_path(&self.request_path);
        Ok(url)
    }
}

fn strip_mount<'a>(path: &'a str, prefix: &str) -> &'a str {
    match path.strip_prefix(prefix) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}

/// Splits a `Host` header into name and port, bracketed IPv6 included.
fn split_host(host: &str, default_port: u16) -> Option<(String, u16)> {
    let host = host.trim();
    if host.is_empty() {
        return None;
    }

    let (name, port) = match host.rfind(':') {
        Some(index) if !host[index..].contains(']') => (&host[..index], Some(&host[index + 1..])),
        _ => (host, None),
    };

    let port = match port {
        Some(port) => port.parse().ok()?,
        None => default_port,
    };
    let name = name.trim_start_matches('[').trim_end_matches(']');
    Some((name.to_string(), port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_header_forms() {
        assert_eq!(split_host("example.com", 80), Some(("example.com".into(), 80)));
        assert_eq!(split_host("example.com:8443", 80), Some(("example.com".into(), 8443)));
        assert_eq!(split_host("[::1]:9000", 80), Some(("::1".into(), 9000)));
        assert_eq!(split_host("[::1]", 80), Some(("::1".into(), 80)));
        assert_eq!(split_host("example.com:http", 80), None);
        assert_eq!(split_host("", 80), None);
    }

    #[test]
    fn mount_prefix_matches_whole_segments() {
        assert_eq!(strip_mount("/ctx/A", "/ctx"), "/A");
        assert_eq!(strip_mount("/ctx", "/ctx"), "");
        assert_eq!(strip_mount("/ctxfoo/A", "/ctx"), "/ctxfoo/A");
        assert_eq!(strip_mount("/A", ""), "/A");
    }
}
