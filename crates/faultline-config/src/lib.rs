//! Declarative error kind catalogs
//!
//! A catalog is a TOML file listing kinds to mint on top of the fixed
//! hierarchy. Entries are installed in order, so an entry may use any
//! earlier one as its parent.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod env;
pub mod error;
mod loader;
pub mod template;

use faultline_core::{ErrorKind, KindDefinition, Params};
use serde::Deserialize;

pub use error::{CatalogError, ExpandError};

/// Top-level catalog file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// Kinds to define, in installation order
    #[serde(default)]
    pub kinds: Vec<KindEntry>,
}

/// One `[[kinds]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KindEntry {
    /// Name given to the kind and its instances
    pub name: String,
    /// Parent kind; defaults to `ServerError`
    #[serde(default)]
    pub parent: Option<String>,
    /// Default status
    #[serde(default)]
    pub status: Option<u16>,
    /// Fixed developer-facing message
    #[serde(default)]
    pub message: Option<String>,
    /// Developer-facing message with `{key}` placeholders
    #[serde(default)]
    pub message_template: Option<String>,
    /// Fixed end-user-facing message
    #[serde(default)]
    pub user_message: Option<String>,
    /// End-user-facing message with `{key}` placeholders
    #[serde(default)]
    pub user_message_template: Option<String>,
    /// Extra default attributes
    #[serde(default)]
    pub attributes: Params,
}

impl KindEntry {
    /// Build the factory definition for this entry under `parent`
    pub fn definition(&self, parent: &ErrorKind) -> KindDefinition {
        let mut definition = KindDefinition::new(&self.name).parent(parent);

        if let Some(status) = self.status {
            definition = definition.status(status);
        }

        if let Some(message) = &self.message {
            definition = definition.message(message.as_str());
        } else if let Some(message) = &self.message_template {
            definition = definition.message(template::message_template(message));
        }

        if let Some(user_message) = &self.user_message {
            definition = definition.user_message(user_message.as_str());
        } else if let Some(user_message) = &self.user_message_template {
            definition = definition.user_message(template::message_template(user_message));
        }

        for (key, value) in &self.attributes {
            definition = definition.attribute(key, value.clone());
        }

        definition
    }
}
