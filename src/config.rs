//! Configuration for the Eloqua client

use std::str::FromStr;
use std::time::Duration;

use crate::error::{Error, Result};

/// Configuration for the Eloqua client.
///
/// A fixed set of fields rather than a dynamic map, so most misconfiguration
/// is a compile-time error. The dynamic [`OptionKey`]/[`OptionValue`] surface
/// exists for callers that rebind options late (by name) and validates the
/// key against the declared set.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOptions {
    /// Base URL of the Eloqua REST API, without trailing version segment.
    pub base_url: String,

    /// REST API version appended to the base URL.
    pub version: String,

    /// User agent sent with every request.
    pub user_agent: String,

    /// Request timeout handed to the HTTP client.
    pub timeout: Duration,

    /// Default page size applied to searches that do not set one.
    pub count: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: crate::DEFAULT_BASE_URL.to_string(),
            version: crate::DEFAULT_API_VERSION.to_string(),
            user_agent: format!("elorest/{}", crate::VERSION),
            timeout: Duration::from_secs(10),
            count: 100,
        }
    }
}

impl ClientOptions {
    /// Create a builder for fluent configuration.
    pub fn builder() -> ClientOptionsBuilder {
        ClientOptionsBuilder::default()
    }

    /// Load options from environment variables.
    ///
    /// Reads `ELOQUA_BASE_URL`, `ELOQUA_API_VERSION`, `ELOQUA_USER_AGENT`,
    /// `ELOQUA_TIMEOUT` (seconds) and `ELOQUA_COUNT`, leaving defaults in
    /// place for anything unset. A `.env` file is honored when present.
    #[cfg(feature = "env")]
    pub fn from_env() -> Self {
        use std::env;

        dotenvy::dotenv().ok();

        let mut options = Self::default();

        if let Ok(base_url) = env::var("ELOQUA_BASE_URL") {
            options.base_url = base_url;
        }
        if let Ok(version) = env::var("ELOQUA_API_VERSION") {
            options.version = version;
        }
        if let Ok(user_agent) = env::var("ELOQUA_USER_AGENT") {
            options.user_agent = user_agent;
        }
        if let Ok(timeout) = env::var("ELOQUA_TIMEOUT")
            && let Ok(secs) = timeout.parse::<u64>()
        {
            options.timeout = Duration::from_secs(secs);
        }
        if let Ok(count) = env::var("ELOQUA_COUNT")
            && let Ok(count) = count.parse::<u32>()
        {
            options.count = count;
        }

        options
    }

    /// Read an option by key.
    pub fn get(&self, key: OptionKey) -> OptionValue {
        match key {
            OptionKey::BaseUrl => OptionValue::Text(self.base_url.clone()),
            OptionKey::Version => OptionValue::Text(self.version.clone()),
            OptionKey::UserAgent => OptionValue::Text(self.user_agent.clone()),
            OptionKey::Timeout => OptionValue::Duration(self.timeout),
            OptionKey::Count => OptionValue::Integer(u64::from(self.count)),
        }
    }

    /// Write an option by key, validating the value's type.
    pub fn set(&mut self, key: OptionKey, value: OptionValue) -> Result<()> {
        match (key, value) {
            (OptionKey::BaseUrl, OptionValue::Text(v)) => self.base_url = v,
            (OptionKey::Version, OptionValue::Text(v)) => self.version = v,
            (OptionKey::UserAgent, OptionValue::Text(v)) => self.user_agent = v,
            (OptionKey::Timeout, OptionValue::Duration(v)) => self.timeout = v,
            (OptionKey::Count, OptionValue::Integer(v)) => {
                self.count = u32::try_from(v).map_err(|_| {
                    Error::InvalidArgument(format!("count out of range: {v}"))
                })?;
            }
            (key, value) => {
                return Err(Error::InvalidArgument(format!(
                    "option \"{key}\" does not accept {}",
                    value.kind()
                )));
            }
        }

        Ok(())
    }
}

/// The closed set of option names the client recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    /// `base_url`
    BaseUrl,
    /// `version`
    Version,
    /// `user_agent`
    UserAgent,
    /// `timeout`
    Timeout,
    /// `count`
    Count,
}

impl OptionKey {
    /// The option's wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::BaseUrl => "base_url",
            OptionKey::Version => "version",
            OptionKey::UserAgent => "user_agent",
            OptionKey::Timeout => "timeout",
            OptionKey::Count => "count",
        }
    }
}

impl std::fmt::Display for OptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "base_url" => Ok(OptionKey::BaseUrl),
            "version" => Ok(OptionKey::Version),
            "user_agent" => Ok(OptionKey::UserAgent),
            "timeout" => Ok(OptionKey::Timeout),
            "count" => Ok(OptionKey::Count),
            other => Err(Error::InvalidArgument(format!(
                "Undefined option: \"{other}\""
            ))),
        }
    }
}

/// A value for the dynamic option surface.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// String-valued options (`base_url`, `version`, `user_agent`).
    Text(String),
    /// The request timeout.
    Duration(Duration),
    /// Integer-valued options (`count`).
    Integer(u64),
}

impl OptionValue {
    fn kind(&self) -> &'static str {
        match self {
            OptionValue::Text(_) => "a string",
            OptionValue::Duration(_) => "a duration",
            OptionValue::Integer(_) => "an integer",
        }
    }
}

/// Builder for [`ClientOptions`] with a fluent API.
#[derive(Debug, Default)]
pub struct ClientOptionsBuilder {
    options: ClientOptions,
}

impl ClientOptionsBuilder {
    /// Set the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.options.base_url = base_url.into();
        self
    }

    /// Set the REST API version segment.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.options.version = version.into();
        self
    }

    /// Set the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.options.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    /// Set the default search page size.
    pub fn count(mut self, count: u32) -> Self {
        self.options.count = count;
        self
    }

    /// Build the options.
    pub fn build(self) -> ClientOptions {
        self.options
    }
}
