use std::ops::Index;

use indexmap::IndexMap;
use serde_json::Value;

use crate::builtin::{self, FixedKind, ServerError};
use crate::kind::ErrorKind;
use crate::params::{ErrorParams, MessageTemplate, Params};

/// Mapping from kind name to kind descriptor
#[derive(Debug, Clone, Default)]
pub struct Registry {
    kinds: IndexMap<String, ErrorKind>,
}

impl Registry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the fixed hierarchy
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for kind in builtin::all() {
            registry.insert(kind.clone());
        }
        registry
    }

    pub fn get(&self, name: &str) -> Option<&ErrorKind> {
        self.kinds.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// Insert a kind under its own name, returning the kind it replaced
    pub fn insert(&mut self, kind: ErrorKind) -> Option<ErrorKind> {
        self.kinds.insert(kind.name().to_owned(), kind)
    }

    pub fn remove(&mut self, name: &str) -> Option<ErrorKind> {
        self.kinds.shift_remove(name)
    }

    /// Registered kinds in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorKind)> {
        self.kinds.iter().map(|(name, kind)| (name.as_str(), kind))
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Shorthand for [`define`] into this registry
    pub fn define(&mut self, definition: KindDefinition) -> ErrorKind {
        define(self, definition)
    }
}

impl Index<&str> for Registry {
    type Output = ErrorKind;

    fn index(&self, name: &str) -> &Self::Output {
        &self.kinds[name]
    }
}

/// Template for a kind minted at runtime
///
/// Without an explicit parent the new kind specializes `ServerError`.
#[derive(Debug, Clone)]
pub struct KindDefinition {
    name: String,
    parent: Option<ErrorKind>,
    template: ErrorParams,
}

impl KindDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            template: ErrorParams::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind to specialize; captured now, not looked up later
    #[must_use]
    pub fn parent(mut self, parent: &ErrorKind) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    /// Merge a whole parameter bag into the template
    #[must_use]
    pub fn template(mut self, template: ErrorParams) -> Self {
        self.template = self.template.merge(template);
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<MessageTemplate>) -> Self {
        self.template = self.template.message(message);
        self
    }

    #[must_use]
    pub fn message_fn<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&Params) -> String + Send + Sync + 'static,
    {
        self.template = self.template.message_fn(resolver);
        self
    }

    #[must_use]
    pub fn user_message(mut self, user_message: impl Into<MessageTemplate>) -> Self {
        self.template = self.template.user_message(user_message);
        self
    }

    #[must_use]
    pub fn user_message_fn<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&Params) -> String + Send + Sync + 'static,
    {
        self.template = self.template.user_message_fn(resolver);
        self
    }

    #[must_use]
    pub fn status(mut self, status: u16) -> Self {
        self.template = self.template.status(status);
        self
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.template = self.template.attribute(key, value);
        self
    }
}

/// Mint a new kind from `definition` and insert it into `registry`
///
/// An existing entry with the same name is replaced. Kinds already derived
/// from the replaced entry keep their original parent.
pub fn define(registry: &mut Registry, definition: KindDefinition) -> ErrorKind {
    let KindDefinition { name, parent, template } = definition;
    let parent = parent.unwrap_or_else(|| ServerError::kind().clone());
    let kind = ErrorKind::derive(&parent, name, template);

    if registry.insert(kind.clone()).is_some() {
        tracing::debug!(kind = %kind, parent = %parent, "replaced existing error kind");
    } else {
        tracing::debug!(kind = %kind, parent = %parent, "defined error kind");
    }

    kind
}
