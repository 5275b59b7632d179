//! Eloqua custom objects
//!
//! The REST v1.0 API for custom object records only supports creating new
//! records and parameter-less searching; the object definitions live under a
//! separate assets endpoint exposed through [`CustomObjectMeta`].

use async_trait::async_trait;
use http::HeaderMap;
use serde_json::Value;

use super::{Api, Creatable, SearchOptions, Searchable, encode_id, load_elements, search_params};
use crate::client::Client;
use crate::error::{Error, Result};
use crate::http::Params;
use crate::types::{CustomObjectData, CustomObjectMetaData};

/// Custom object records resource.
///
/// Eloqua accounts can define multiple custom objects;
/// [`identify`](Self::identify) selects which one to interface with.
#[derive(Clone, Debug)]
pub struct CustomObjects {
    client: Client,
    id: String,
}

impl CustomObjects {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            id: String::new(),
        }
    }

    /// Select the custom object to interact with. The id is URL-encoded on
    /// assignment.
    pub fn identify(&mut self, id: &str) -> &mut Self {
        self.id = encode_id(id);
        self
    }

    /// Handle for this object's definition (the asset, not its records).
    pub fn meta(&self) -> CustomObjectMeta {
        CustomObjectMeta::new(self.client.clone())
    }

    fn data_path(&self) -> String {
        format!("data/customObject/{}", self.id)
    }
}

impl Api for CustomObjects {
    fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Searchable for CustomObjects {
    type Item = CustomObjectData;

    /// Retrieve records of the identified object.
    ///
    /// The records endpoint only supports unfiltered retrieval at this API
    /// version; any non-empty `search` term fails with
    /// [`Error::InvalidArgument`] before a request is issued.
    async fn search(&self, search: &str, options: &SearchOptions) -> Result<Vec<CustomObjectData>> {
        if !search.is_empty() {
            return Err(Error::InvalidArgument(
                "Sorry, non-empty search parameters are not currently supported".into(),
            ));
        }

        let params = search_params(&self.client, search, options);
        let response = self
            .get(&self.data_path(), &params, &HeaderMap::new())
            .await?;

        let raw: Vec<Value> = load_elements(&response)?;
        raw.into_iter().map(CustomObjectData::load).collect()
    }
}

#[async_trait]
impl Creatable for CustomObjects {
    type Data = CustomObjectData;

    /// Create one record of the identified object.
    async fn create(&self, data: &CustomObjectData) -> Result<Value> {
        let body = serde_json::to_value(data).map_err(Error::Serialization)?;
        self.post(&self.data_path(), &body, &HeaderMap::new()).await
    }
}

/// Custom object definitions, served from the assets endpoint.
///
/// Unlike the records endpoint, asset search accepts filter terms.
#[derive(Clone, Debug)]
pub struct CustomObjectMeta {
    client: Client,
}

impl CustomObjectMeta {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch one object definition by id.
    pub async fn show(&self, id: &str) -> Result<CustomObjectMetaData> {
        let raw = self
            .get(
                &format!("assets/customObject/{}", encode_id(id)),
                &Params::new(),
                &HeaderMap::new(),
            )
            .await?;
        CustomObjectMetaData::load(raw)
    }
}

impl Api for CustomObjectMeta {
    fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Searchable for CustomObjectMeta {
    type Item = CustomObjectMetaData;

    async fn search(
        &self,
        search: &str,
        options: &SearchOptions,
    ) -> Result<Vec<CustomObjectMetaData>> {
        let params = search_params(&self.client, search, options);
        let response = self
            .get("assets/customObjects", &params, &HeaderMap::new())
            .await?;

        let raw: Vec<Value> = load_elements(&response)?;
        raw.into_iter().map(CustomObjectMetaData::load).collect()
    }
}
