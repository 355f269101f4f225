//! odata-intake - HTTP request interpretation
//!
//! Turns a raw inbound request into the pieces a resource-oriented service
//! dispatches on: body media type, negotiated formats and languages, and a
//! path split into mount prefix and protocol segments.

pub mod config;
pub mod error;
pub mod http;
pub mod intake;
pub mod negotiation;
pub mod path;

pub use error::InterpretError;
pub use intake::{Interpretation, RequestInfo, interpret};
