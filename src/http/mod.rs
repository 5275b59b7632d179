//! HTTP transport abstraction
//!
//! This module owns the boundary between the resource layer and the network:
//! the [`Transport`] trait every request funnels through, and the
//! reqwest-backed [`RestTransport`] the client constructs by default.

pub use rest_transport::RestTransport;
pub use transport::Transport;

mod rest_transport;
mod transport;

use std::collections::BTreeMap;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};

/// Query parameters for `GET`/`DELETE` requests.
///
/// Ordered so serialized URLs are deterministic.
pub type Params = BTreeMap<String, String>;
