//! Typed data objects for Eloqua records
//!
//! Each record type mirrors the REST v1.0 wire shape (`camelCase` fields,
//! everything optional that the API may omit) and provides a `load`
//! constructor converting a raw response element into the typed form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// An Eloqua contact record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Record id, absent on creation payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The contact's email address; Eloqua's primary identifier.
    pub email_address: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub last_name: Option<String>,

    /// Custom field values keyed by field id.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_values: Vec<FieldValue>,
}

impl Contact {
    /// Build a creation payload from an email address.
    pub fn new(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            ..Self::default()
        }
    }

    /// Load a contact from a raw response element.
    pub fn load(raw: Value) -> Result<Self> {
        serde_json::from_value(raw).map_err(Error::Serialization)
    }
}

/// A custom field id/value pair carried by contacts and custom objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValue {
    /// Field definition id.
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub value: Option<String>,
}

impl FieldValue {
    /// Pair a field id with a value.
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: Some(value.into()),
        }
    }
}

/// A contact's membership in one email group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubscription {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub id: Option<String>,

    /// Whether the contact is subscribed to the group.
    pub is_subscribed: bool,

    /// The email group this subscription refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_group: Option<EmailGroup>,
}

impl ContactSubscription {
    /// Load a subscription from a raw response element.
    pub fn load(raw: Value) -> Result<Self> {
        serde_json::from_value(raw).map_err(Error::Serialization)
    }
}

/// An Eloqua email group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailGroup {
    #[allow(missing_docs)]
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub name: Option<String>,
}

/// One record of a custom object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomObjectData {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub id: Option<String>,

    /// The record's field values, keyed by the object definition's field ids.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_values: Vec<FieldValue>,
}

impl CustomObjectData {
    /// Build a record from field values.
    pub fn new(field_values: Vec<FieldValue>) -> Self {
        Self {
            id: None,
            field_values,
        }
    }

    /// Load a record from a raw response element.
    pub fn load(raw: Value) -> Result<Self> {
        serde_json::from_value(raw).map_err(Error::Serialization)
    }
}

/// A custom object's definition (the asset, not its records).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomObjectMetaData {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub id: Option<String>,

    #[allow(missing_docs)]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub description: Option<String>,

    /// Field definitions belonging to the object.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<CustomObjectField>,
}

impl CustomObjectMetaData {
    /// Load a definition from a raw response element.
    pub fn load(raw: Value) -> Result<Self> {
        serde_json::from_value(raw).map_err(Error::Serialization)
    }
}

/// One field definition inside a custom object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomObjectField {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub id: Option<String>,

    #[allow(missing_docs)]
    pub name: String,

    /// Eloqua data type of the field (`text`, `numeric`, `date`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}
