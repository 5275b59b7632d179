//! Main client implementation for the Eloqua REST API

use std::sync::{Arc, PoisonError, RwLock};

use http::HeaderMap;
use serde_json::Value;

use crate::{
    config::{ClientOptions, OptionKey, OptionValue},
    error::{Error, Result},
    http::{RestTransport, Transport},
    resources::{
        ContactSubscriptions, Contacts, CustomObjectMeta, CustomObjects, SearchOptions, Searchable,
    },
};

/// REST client for Eloqua's API.
///
/// The client owns configuration and the HTTP transport; resource handles
/// obtained from it share both. Cloning is cheap and clones observe the same
/// transport and options.
///
/// # Example
///
/// ```rust,no_run
/// use elorest::Client;
///
/// # async fn example() -> elorest::Result<()> {
/// let client = Client::new();
/// client.authenticate("MySite", "My.User", "password")?;
///
/// let contacts = client.contacts();
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    /// Configuration; guarded so option mutation concurrent with in-flight
    /// requests stays defined behavior.
    options: RwLock<ClientOptions>,

    /// The transport, lazily constructed from the options on first use.
    /// At most one instance is live per client.
    transport: RwLock<Option<Arc<dyn Transport>>>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Instantiate a client with default options.
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default())
    }

    /// Instantiate a client with explicit options.
    pub fn with_options(options: ClientOptions) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                options: RwLock::new(options),
                transport: RwLock::new(None),
            }),
        }
    }

    /// Instantiate a client with an injected transport.
    ///
    /// The given transport is used for every request; no default transport is
    /// constructed.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        let client = Self::new();
        client.set_transport(transport);
        client
    }

    /// The primary interface for interacting with different Eloqua objects.
    ///
    /// Recognized names form a closed enumeration; anything else fails with
    /// [`Error::InvalidArgument`] rather than defaulting. Each call returns a
    /// freshly constructed handle bound to this client.
    pub fn api(&self, name: &str) -> Result<ResourceApi> {
        match name {
            "contact" | "contacts" => Ok(ResourceApi::Contacts(self.contacts())),
            "contact_subscription" | "contact_subscriptions" => {
                Ok(ResourceApi::ContactSubscriptions(self.contact_subscriptions()))
            }
            "custom_object" | "custom_objects" => {
                Ok(ResourceApi::CustomObjects(self.custom_objects()))
            }
            "custom_object_meta" => Ok(ResourceApi::CustomObjectMeta(self.custom_object_meta())),
            other => Err(Error::InvalidArgument(format!(
                "Undefined API instance: \"{other}\""
            ))),
        }
    }

    /// Interact with Eloqua contacts.
    pub fn contacts(&self) -> Contacts {
        Contacts::new(self.clone())
    }

    /// Interact with a contact's email group subscriptions.
    ///
    /// Call [`ContactSubscriptions::identify`] with a contact id before use.
    pub fn contact_subscriptions(&self) -> ContactSubscriptions {
        ContactSubscriptions::new(self.clone())
    }

    /// Interact with custom object records.
    pub fn custom_objects(&self) -> CustomObjects {
        CustomObjects::new(self.clone())
    }

    /// Interact with custom object definitions.
    pub fn custom_object_meta(&self) -> CustomObjectMeta {
        CustomObjectMeta::new(self.clone())
    }

    /// Authenticate a user for all subsequent requests.
    ///
    /// Credentials are forwarded to the transport, which attaches them to
    /// every request from here on. No eager network call is made.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidArgument`] when any of site, login, or
    /// password is empty.
    pub fn authenticate(&self, site: &str, login: &str, password: &str) -> Result<()> {
        if site.is_empty() || login.is_empty() || password.is_empty() {
            return Err(Error::InvalidArgument(
                "You must specify authentication details.".into(),
            ));
        }

        self.transport()?.authenticate(site, login, password);
        Ok(())
    }

    /// The transport this client sends requests through.
    ///
    /// A default [`RestTransport`] is lazily constructed from the current
    /// options when none has been set; construction fails if the configured
    /// base URL is unusable.
    pub fn transport(&self) -> Result<Arc<dyn Transport>> {
        if let Some(transport) = self
            .inner
            .transport
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(Arc::clone(transport));
        }

        let mut slot = self
            .inner
            .transport
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // A concurrent caller may have won the race.
        if let Some(transport) = slot.as_ref() {
            return Ok(Arc::clone(transport));
        }

        let options = self
            .inner
            .options
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let transport: Arc<dyn Transport> = Arc::new(RestTransport::new(&options)?);
        *slot = Some(Arc::clone(&transport));
        Ok(transport)
    }

    /// Replace the transport.
    pub fn set_transport(&self, transport: Arc<dyn Transport>) {
        let mut slot = self
            .inner
            .transport
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(transport);
    }

    /// Merge headers into the transport's default header state.
    pub fn set_headers(&self, headers: HeaderMap) -> Result<()> {
        self.transport()?.set_headers(headers);
        Ok(())
    }

    /// Clear the transport's default headers.
    pub fn clear_headers(&self) -> Result<()> {
        self.transport()?.clear_headers();
        Ok(())
    }

    /// Return a named option.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidArgument`] when `name` is not one of
    /// `base_url`, `version`, `user_agent`, `timeout`, `count`.
    pub fn get_option(&self, name: &str) -> Result<OptionValue> {
        let key: OptionKey = name.parse()?;
        let options = self
            .inner
            .options
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(options.get(key))
    }

    /// Set a named option.
    ///
    /// Takes effect for transports constructed afterwards; an already-built
    /// transport keeps the options it was created with.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidArgument`] for unknown names and ill-typed
    /// values.
    pub fn set_option(&self, name: &str, value: OptionValue) -> Result<()> {
        let key: OptionKey = name.parse()?;
        let mut options = self
            .inner
            .options
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        options.set(key, value)
    }

    /// Snapshot of the current options.
    pub fn options(&self) -> ClientOptions {
        self.inner
            .options
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn default_count(&self) -> u32 {
        self.inner
            .options
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .count
    }
}

/// Resource handle returned by the name-keyed [`Client::api`] factory.
///
/// A closed tagged union over the resource kinds the client knows, for
/// calling code that resolves resources by name. Code that knows the kind it
/// wants should prefer the typed accessors on [`Client`].
#[derive(Debug)]
pub enum ResourceApi {
    /// `contact` / `contacts`
    Contacts(Contacts),
    /// `contact_subscription` / `contact_subscriptions`
    ContactSubscriptions(ContactSubscriptions),
    /// `custom_object` / `custom_objects`
    CustomObjects(CustomObjects),
    /// `custom_object_meta`
    CustomObjectMeta(CustomObjectMeta),
}

impl ResourceApi {
    /// Search the resource, returning raw (untyped) result elements.
    ///
    /// Every resource kind implements `search` structurally, so generic
    /// calling code can rely on this uniform shape; per-resource search
    /// restrictions (unfiltered-only endpoints, required identifiers) still
    /// apply.
    pub async fn search(&self, search: &str, options: &SearchOptions) -> Result<Vec<Value>> {
        match self {
            ResourceApi::Contacts(api) => collect_raw(api.search(search, options).await?),
            ResourceApi::ContactSubscriptions(api) => {
                collect_raw(api.search(search, options).await?)
            }
            ResourceApi::CustomObjects(api) => collect_raw(api.search(search, options).await?),
            ResourceApi::CustomObjectMeta(api) => collect_raw(api.search(search, options).await?),
        }
    }

    /// Borrow as a contacts handle, if that is the resolved kind.
    pub fn as_contacts(&self) -> Option<&Contacts> {
        match self {
            ResourceApi::Contacts(api) => Some(api),
            _ => None,
        }
    }

    /// Borrow as a custom-objects handle, if that is the resolved kind.
    pub fn as_custom_objects(&self) -> Option<&CustomObjects> {
        match self {
            ResourceApi::CustomObjects(api) => Some(api),
            _ => None,
        }
    }
}

fn collect_raw<T: serde::Serialize>(items: Vec<T>) -> Result<Vec<Value>> {
    items
        .into_iter()
        .map(|item| serde_json::to_value(item).map_err(Error::Serialization))
        .collect()
}
