//! API resource endpoints
//!
//! One module per Eloqua resource, all built on the [`Api`] base contract.
//! Capability traits ([`Creatable`], [`Searchable`]) mark which operations a
//! remote resource supports; a resource that lacks a capability simply does
//! not implement the trait.

pub mod contact_subscriptions;
pub mod contacts;
pub mod custom_objects;

pub use contact_subscriptions::ContactSubscriptions;
pub use contacts::Contacts;
pub use custom_objects::{CustomObjectMeta, CustomObjects};

use async_trait::async_trait;
use http::HeaderMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::http::Params;

/// Base trait for API resources.
///
/// Every resource holds a [`Client`] and reaches the network exclusively
/// through these verb methods, which delegate to the client's transport
/// unchanged: same path, same parameters, same headers, result passed back
/// as-is. The verbs are stateless; resources keep no response state.
#[async_trait]
pub trait Api: Send + Sync {
    /// The client this resource is bound to.
    fn client(&self) -> &Client;

    /// `GET` a path relative to the versioned base URL.
    async fn get(&self, path: &str, params: &Params, headers: &HeaderMap) -> Result<Value> {
        self.client().transport()?.get(path, params, headers).await
    }

    /// `POST` a JSON body to a relative path.
    async fn post(&self, path: &str, body: &Value, headers: &HeaderMap) -> Result<Value> {
        self.client().transport()?.post(path, body, headers).await
    }

    /// `PUT` a JSON body to a relative path.
    async fn put(&self, path: &str, body: &Value, headers: &HeaderMap) -> Result<Value> {
        self.client().transport()?.put(path, body, headers).await
    }

    /// `PATCH` a JSON body to a relative path.
    async fn patch(&self, path: &str, body: &Value, headers: &HeaderMap) -> Result<Value> {
        self.client().transport()?.patch(path, body, headers).await
    }

    /// `DELETE` a relative path.
    async fn delete(&self, path: &str, params: &Params, headers: &HeaderMap) -> Result<Value> {
        self.client()
            .transport()?
            .delete(path, params, headers)
            .await
    }
}

/// Capability: the remote resource accepts record creation.
#[async_trait]
pub trait Creatable: Api {
    /// The typed data object this resource accepts.
    ///
    /// Passing any other type is a compile-time error, which replaces the
    /// source library's runtime instance check.
    type Data: Serialize + Send + Sync;

    /// Create a record, returning the decoded response payload.
    async fn create(&self, data: &Self::Data) -> Result<Value>;
}

/// Capability: the remote resource supports searching.
///
/// Some endpoints only support unfiltered retrieval; those reject any
/// non-empty `search` term with [`Error::InvalidArgument`] before issuing a
/// request (documented per resource).
#[async_trait]
pub trait Searchable: Api {
    /// The typed data object each result element loads into.
    type Item: DeserializeOwned;

    /// Search the resource, mapping each raw element through the loader.
    async fn search(&self, search: &str, options: &SearchOptions) -> Result<Vec<Self::Item>>;
}

/// Options accepted by search endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size; falls back to the client's configured `count`.
    pub count: Option<u32>,
    /// How much of each record the API should return.
    pub depth: Option<Depth>,
    /// Field to order results by.
    pub order_by: Option<String>,
}

impl SearchOptions {
    /// Options requesting a specific page.
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }
}

/// Record detail level understood by Eloqua list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Ids and a handful of summary fields.
    Minimal,
    /// Summary plus most scalar fields.
    Partial,
    /// Everything, including field value lists.
    Complete,
}

impl Depth {
    fn as_str(self) -> &'static str {
        match self {
            Depth::Minimal => "minimal",
            Depth::Partial => "partial",
            Depth::Complete => "complete",
        }
    }
}

/// Percent-encode a caller-supplied identifier for use as a path segment.
pub(crate) fn encode_id(raw: &str) -> String {
    use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

    // Everything but unreserved characters is encoded.
    const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
        .remove(b'-')
        .remove(b'_')
        .remove(b'.')
        .remove(b'~');

    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// Merge a search term and options into query parameters, applying the
/// client's configured page size when the options leave it unset.
pub(crate) fn search_params(client: &Client, search: &str, options: &SearchOptions) -> Params {
    let mut params = Params::new();
    params.insert("search".into(), search.into());

    if let Some(page) = options.page {
        params.insert("page".into(), page.to_string());
    }
    let count = options.count.unwrap_or_else(|| client.default_count());
    params.insert("count".into(), count.to_string());
    if let Some(depth) = options.depth {
        params.insert("depth".into(), depth.as_str().into());
    }
    if let Some(order_by) = &options.order_by {
        params.insert("orderBy".into(), order_by.clone());
    }

    params
}

/// Map every entry of a list response's `elements` array through the typed
/// loader, preserving order and length.
pub(crate) fn load_elements<T: DeserializeOwned>(response: &Value) -> Result<Vec<T>> {
    let elements = response
        .get("elements")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            Error::ResponseValidation("list response is missing an 'elements' array".into())
        })?;

    elements
        .iter()
        .map(|element| serde_json::from_value(element.clone()).map_err(Error::Serialization))
        .collect()
}
