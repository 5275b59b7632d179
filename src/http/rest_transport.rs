//! Reqwest-backed transport implementation
//!
//! Handles URL resolution against the versioned base URL, Basic
//! authentication in Eloqua's `site\login` form, transport-held default
//! headers, and decoding of responses into JSON values. No retries happen
//! here: a failed call is surfaced as-is.

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use http::{HeaderMap, HeaderValue, Method};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use url::Url;

use super::{Params, Transport};
use crate::config::ClientOptions;
use crate::error::{Error, Result};

/// HTTP transport for the Eloqua REST API, built on `reqwest`.
///
/// Constructed from [`ClientOptions`]; the options are snapshotted at
/// construction time, so later option mutation only affects transports
/// created afterwards.
#[derive(Debug)]
pub struct RestTransport {
    /// Underlying HTTP client (connection pooling, TLS, timeout).
    http_client: reqwest::Client,
    /// Fully resolved `{base_url}/{version}/` URL.
    base_url: Url,
    /// Request timeout, kept for error reporting.
    timeout: Duration,
    /// Pre-encoded `Basic` authorization value, set by `authenticate`.
    credentials: Mutex<Option<SecretString>>,
    /// Transport-held default headers, mutable via the client.
    default_headers: Mutex<HeaderMap>,
}

impl RestTransport {
    /// Build a transport from client options.
    ///
    /// # Errors
    ///
    /// Fails when the base URL does not parse, uses a scheme other than
    /// http/https, or the HTTP client cannot be constructed.
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.clone())
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        let base = format!(
            "{}/{}/",
            options.base_url.trim_end_matches('/'),
            options.version.trim_matches('/')
        );
        let base_url: Url = base
            .parse()
            .map_err(|e| Error::InvalidUrl(format!("{e}: {base}")))?;

        match base_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::InvalidUrl(format!(
                    "Invalid URL scheme '{scheme}'. Only 'http' and 'https' are supported."
                )));
            }
        }

        Ok(Self {
            http_client,
            base_url,
            timeout: options.timeout,
            credentials: Mutex::new(None),
            default_headers: Mutex::new(HeaderMap::new()),
        })
    }

    fn resolve(&self, path: &str) -> Result<Url> {
        // Leading slashes would escape the version segment on join.
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::InvalidUrl(format!("Failed to resolve path '{path}': {e}")))
    }

    fn request_headers(&self, extra: &HeaderMap) -> Result<HeaderMap> {
        let mut headers = self
            .default_headers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        for (key, value) in extra {
            headers.insert(key.clone(), value.clone());
        }

        let credentials = self
            .credentials
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(token) = credentials.as_ref() {
            let mut value = HeaderValue::from_str(token.expose_secret())
                .map_err(|_| Error::HttpClient("credentials form an invalid header".into()))?;
            value.set_sensitive(true);
            headers.insert(http::header::AUTHORIZATION, value);
        }

        Ok(headers)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        params: Option<&Params>,
        body: Option<&Value>,
        headers: &HeaderMap,
    ) -> Result<Value> {
        let url = self.resolve(path)?;
        tracing::debug!(%method, %url, "sending Eloqua request");

        let mut request = self
            .http_client
            .request(method, url)
            .headers(self.request_headers(headers)?);

        if let Some(params) = params {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(self.timeout)
            } else {
                Error::Connection(e.to_string())
            }
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        tracing::debug!(status = status.as_u16(), "Eloqua response received");

        if !status.is_success() {
            return Err(Error::from_response(status.as_u16(), &text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text)
            .map_err(|e| Error::ResponseValidation(format!("invalid JSON body: {e}")))
    }
}

#[async_trait]
impl Transport for RestTransport {
    async fn get(&self, path: &str, params: &Params, headers: &HeaderMap) -> Result<Value> {
        self.execute(Method::GET, path, Some(params), None, headers)
            .await
    }

    async fn post(&self, path: &str, body: &Value, headers: &HeaderMap) -> Result<Value> {
        self.execute(Method::POST, path, None, Some(body), headers)
            .await
    }

    async fn put(&self, path: &str, body: &Value, headers: &HeaderMap) -> Result<Value> {
        self.execute(Method::PUT, path, None, Some(body), headers)
            .await
    }

    async fn patch(&self, path: &str, body: &Value, headers: &HeaderMap) -> Result<Value> {
        self.execute(Method::PATCH, path, None, Some(body), headers)
            .await
    }

    async fn delete(&self, path: &str, params: &Params, headers: &HeaderMap) -> Result<Value> {
        self.execute(Method::DELETE, path, Some(params), None, headers)
            .await
    }

    fn authenticate(&self, site: &str, login: &str, password: &str) {
        // Eloqua's Basic scheme compounds the site and login into the user
        // name: base64("site\login:password").
        let token = STANDARD.encode(format!("{site}\\{login}:{password}"));
        let mut credentials = self
            .credentials
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *credentials = Some(SecretString::from(format!("Basic {token}")));
    }

    fn set_headers(&self, headers: HeaderMap) {
        let mut current = self
            .default_headers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for (key, value) in &headers {
            current.insert(key.clone(), value.clone());
        }
    }

    fn clear_headers(&self) {
        let mut current = self
            .default_headers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        current.clear();
    }

    fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}
