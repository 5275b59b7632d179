//! Email group subscriptions of a single contact

use async_trait::async_trait;
use http::HeaderMap;
use serde_json::Value;

use super::{Api, SearchOptions, Searchable, encode_id, load_elements, search_params};
use crate::client::Client;
use crate::error::{Error, Result};
use crate::types::ContactSubscription;

/// Contact subscriptions resource.
///
/// Subscriptions hang off a contact, so a contact id must be supplied via
/// [`identify`](Self::identify) before any request. The subscriptions
/// endpoint only supports unfiltered retrieval; a non-empty search term is
/// rejected before any network call.
#[derive(Clone, Debug)]
pub struct ContactSubscriptions {
    client: Client,
    contact_id: Option<String>,
}

impl ContactSubscriptions {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            contact_id: None,
        }
    }

    /// Bind this handle to a contact. The id is URL-encoded on assignment.
    pub fn identify(&mut self, contact_id: &str) -> &mut Self {
        self.contact_id = Some(encode_id(contact_id));
        self
    }

    fn contact_id(&self) -> Result<&str> {
        self.contact_id.as_deref().ok_or_else(|| {
            Error::InvalidArgument(
                "No contact identified; call identify() with a contact id first.".into(),
            )
        })
    }

    /// Subscribe or unsubscribe the contact for one email group.
    pub async fn update(
        &self,
        group_id: &str,
        subscription: &ContactSubscription,
    ) -> Result<ContactSubscription> {
        let path = format!(
            "data/contact/{}/email/subscription/{}",
            self.contact_id()?,
            encode_id(group_id)
        );
        let body = serde_json::to_value(subscription).map_err(Error::Serialization)?;
        let raw = self.put(&path, &body, &HeaderMap::new()).await?;
        ContactSubscription::load(raw)
    }

    async fn search_raw(&self, search: &str, options: &SearchOptions) -> Result<Vec<Value>> {
        if !search.is_empty() {
            return Err(Error::InvalidArgument(
                "The subscriptions endpoint does not support search terms.".into(),
            ));
        }

        let path = format!("data/contact/{}/email/subscriptions", self.contact_id()?);
        let params = search_params(&self.client, search, options);
        let response = self.get(&path, &params, &HeaderMap::new()).await?;
        load_elements(&response)
    }
}

impl Api for ContactSubscriptions {
    fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Searchable for ContactSubscriptions {
    type Item = ContactSubscription;

    async fn search(
        &self,
        search: &str,
        options: &SearchOptions,
    ) -> Result<Vec<ContactSubscription>> {
        let raw = self.search_raw(search, options).await?;
        raw.into_iter().map(ContactSubscription::load).collect()
    }
}
