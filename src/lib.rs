//! # elorest
//!
//! A thin Rust client for Oracle Eloqua's REST API (v1.0) covering:
//! - Contacts (search, create, show, update, remove)
//! - Contact email group subscriptions
//! - Custom object records and definitions
//! - Basic authentication in Eloqua's `site\login` form
//!
//! All resources funnel requests through one shared [`Transport`]
//! abstraction owned by the [`Client`], which can be swapped for a custom
//! implementation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use elorest::{Client, SearchOptions, Searchable};
//!
//! #[tokio::main]
//! async fn main() -> elorest::Result<()> {
//!     let client = Client::new();
//!     client.authenticate("MySite", "My.User", "password")?;
//!
//!     let contacts = client.contacts();
//!     for contact in contacts.search("name=acme*", &SearchOptions::default()).await? {
//!         println!("{}", contact.email_address);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use client::{Client, ResourceApi};
pub use config::{ClientOptions, ClientOptionsBuilder, OptionKey, OptionValue};
pub use error::{Error, Result};
pub use http::{Params, RestTransport, Transport};
pub use resources::{
    Api, ContactSubscriptions, Contacts, Creatable, CustomObjectMeta, CustomObjects, Depth,
    SearchOptions, Searchable,
};
pub use types::{
    Contact, ContactSubscription, CustomObjectData, CustomObjectField, CustomObjectMetaData,
    EmailGroup, FieldValue,
};

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod resources;
pub mod types;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use elorest::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Api, Client, ClientOptions, Creatable, Error, Result, SearchOptions, Searchable,
        types::{Contact, ContactSubscription, CustomObjectData, FieldValue},
    };
}

/// Crate version, taken from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://secure.eloqua.com/API/REST";

/// Default REST API version segment.
pub const DEFAULT_API_VERSION: &str = "1.0";
