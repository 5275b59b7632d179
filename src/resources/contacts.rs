//! Eloqua contacts

use async_trait::async_trait;
use http::HeaderMap;
use serde_json::Value;

use super::{
    Api, Creatable, Depth, SearchOptions, Searchable, encode_id, load_elements, search_params,
};
use crate::client::Client;
use crate::error::{Error, Result};
use crate::http::Params;
use crate::types::Contact;

/// Contacts resource.
///
/// Supports free-text searching (`data/contacts`), record creation, and
/// single-record show/update/remove.
#[derive(Clone, Debug)]
pub struct Contacts {
    client: Client,
}

impl Contacts {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch one contact by id.
    pub async fn show(&self, id: &str, depth: Option<Depth>) -> Result<Contact> {
        let mut params = Params::new();
        if let Some(depth) = depth {
            params.insert("depth".into(), depth.as_str().into());
        }

        let raw = self
            .get(
                &format!("data/contact/{}", encode_id(id)),
                &params,
                &HeaderMap::new(),
            )
            .await?;
        Contact::load(raw)
    }

    /// Replace one contact by id.
    pub async fn update(&self, id: &str, contact: &Contact) -> Result<Contact> {
        let body = serde_json::to_value(contact).map_err(Error::Serialization)?;
        let raw = self
            .put(
                &format!("data/contact/{}", encode_id(id)),
                &body,
                &HeaderMap::new(),
            )
            .await?;
        Contact::load(raw)
    }

    /// Delete one contact by id.
    pub async fn remove(&self, id: &str) -> Result<()> {
        self.delete(
            &format!("data/contact/{}", encode_id(id)),
            &Params::new(),
            &HeaderMap::new(),
        )
        .await?;
        Ok(())
    }

    async fn search_raw(&self, search: &str, options: &SearchOptions) -> Result<Vec<Value>> {
        let params = search_params(&self.client, search, options);
        let response = self.get("data/contacts", &params, &HeaderMap::new()).await?;
        load_elements(&response)
    }
}

impl Api for Contacts {
    fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Searchable for Contacts {
    type Item = Contact;

    async fn search(&self, search: &str, options: &SearchOptions) -> Result<Vec<Contact>> {
        let raw = self.search_raw(search, options).await?;
        raw.into_iter().map(Contact::load).collect()
    }
}

#[async_trait]
impl Creatable for Contacts {
    type Data = Contact;

    async fn create(&self, data: &Contact) -> Result<Value> {
        let body = serde_json::to_value(data).map_err(Error::Serialization)?;
        self.post("data/contact", &body, &HeaderMap::new()).await
    }
}
