//! HTTP request model.
//!
//! The interpretation layer never touches sockets; it works on requests that
//! have already been read. This module provides the pieces it needs:
//!
//! - **`request`**: HTTP request representation and accessors for path, query and headers
//! - **`parser`**: Parses a raw HTTP/1.1 request head and body from a byte buffer
//! - **`headers`**: Case-insensitive, multi-valued header storage
//! - **`status`**: The status codes interpretation outcomes map onto
//!
//! # Example
//!
//! ```
//! use odata_intake::http::parser::parse_http_request;
//!
//! let raw = b"GET /svc/Products HTTP/1.1\r\nAccept: application/json\r\n\r\n";
//! let (request, consumed) = parse_http_request(raw).unwrap();
//!
//! assert_eq!(request.path(), "/svc/Products");
//! assert_eq!(request.header("accept"), Some("application/json"));
//! assert_eq!(consumed, raw.len());
//! ```

pub mod headers;
pub mod parser;
pub mod request;
pub mod status;
