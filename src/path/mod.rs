//! Request path decomposition.
//!
//! A path such as `/ctx/svc/tenant;v=2/Products('1')` is read as:
//!
//! ```text
//!  /ctx        /svc          /tenant;v=2          /Products('1')
//!  context     servlet       preceding segment    protocol segment
//!  path        path          (split_point = 1)    (left encoded)
//! ```
//!
//! - **`target`**: where the request arrived and how its path is mounted
//! - **`resolver`**: splits the path and rebuilds the service root URI
//! - **`segment`**: path segments and their matrix parameters
//! - **`query`**: query string parameters
//! - **`codec`**: percent-decoding and re-encoding

pub mod codec;
pub mod query;
pub mod resolver;
pub mod segment;
pub mod target;

pub use query::extract_query_parameters;
pub use resolver::{PathInfo, resolve_path_info, trailing_slash_redirect};
pub use segment::PathSegment;
pub use target::RequestTarget;
