//! Transport trait for abstracting the HTTP collaborator
//!
//! The trait carries no logic; it is the contract the client and every
//! resource delegate to. Implementations own network I/O, header state, and
//! low-level authentication state. Alternative implementations (test doubles,
//! instrumented wrappers) plug in via [`crate::Client::set_transport`].

use async_trait::async_trait;
use http::HeaderMap;
use serde_json::Value;
use std::fmt;

use super::Params;
use crate::error::Result;

/// Contract for performing HTTP requests against the Eloqua REST API.
///
/// Paths are relative to the versioned base URL (e.g. `data/contacts`).
/// Each verb returns the decoded response payload or fails with a
/// transport-level error; nothing above this trait interprets those failures.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Perform a `GET` request with query parameters.
    async fn get(&self, path: &str, params: &Params, headers: &HeaderMap) -> Result<Value>;

    /// Perform a `POST` request with a JSON body.
    async fn post(&self, path: &str, body: &Value, headers: &HeaderMap) -> Result<Value>;

    /// Perform a `PUT` request with a JSON body.
    async fn put(&self, path: &str, body: &Value, headers: &HeaderMap) -> Result<Value>;

    /// Perform a `PATCH` request with a JSON body.
    async fn patch(&self, path: &str, body: &Value, headers: &HeaderMap) -> Result<Value>;

    /// Perform a `DELETE` request with query parameters.
    async fn delete(&self, path: &str, params: &Params, headers: &HeaderMap) -> Result<Value>;

    /// Store credentials; every subsequent request carries them.
    ///
    /// Eloqua authenticates with HTTP Basic over a `site\login` compound
    /// user name. Argument presence is validated by the client before this
    /// is reached.
    fn authenticate(&self, site: &str, login: &str, password: &str);

    /// Merge headers into the transport's default header state.
    fn set_headers(&self, headers: HeaderMap);

    /// Drop all transport-held default headers.
    fn clear_headers(&self);

    /// The versioned base URL requests are resolved against.
    fn base_url(&self) -> &str;
}
