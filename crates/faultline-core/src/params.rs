use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

/// Extra attributes carried by a parameter bag or an error instance
pub type Params = IndexMap<String, Value>;

/// Keys consumed by construction itself
///
/// These are never copied onto an instance as attributes and never passed
/// to message resolvers.
pub const RESERVED_KEYS: [&str; 3] = ["message", "user_message", "name"];

/// Check whether a key is resolved by construction rather than copied
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Render an attribute value as plain text
///
/// Strings are returned without quotes, everything else uses its JSON form.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Read the conventional `status` attribute as an HTTP-like code
pub fn status_of(params: &Params) -> Option<u16> {
    params
        .get("status")
        .and_then(Value::as_u64)
        .and_then(|status| u16::try_from(status).ok())
}

type Resolver = dyn Fn(&Params) -> String + Send + Sync;

/// A message that is either fixed text or computed from the parameter bag
#[derive(Clone)]
pub enum MessageTemplate {
    /// Fixed text, used as-is
    Literal(String),
    /// Called once at construction with the non-reserved attributes
    Function(Arc<Resolver>),
}

impl MessageTemplate {
    /// Build a template from a resolver function
    pub fn from_fn<F>(resolver: F) -> Self
    where
        F: Fn(&Params) -> String + Send + Sync + 'static,
    {
        Self::Function(Arc::new(resolver))
    }

    /// Empty literals carry no text and resolve to the global default
    pub fn is_empty_literal(&self) -> bool {
        matches!(self, Self::Literal(text) if text.is_empty())
    }

    /// Produce the final text for a set of attributes
    ///
    /// Returns `None` for an empty literal so the caller can fall back to a
    /// default. Function output is final, even when empty.
    pub(crate) fn resolve(&self, attributes: &Params) -> Option<String> {
        match self {
            Self::Literal(text) if text.is_empty() => None,
            Self::Literal(text) => Some(text.clone()),
            Self::Function(resolver) => Some(resolver(attributes)),
        }
    }
}

impl fmt::Debug for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl From<&str> for MessageTemplate {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_owned())
    }
}

impl From<String> for MessageTemplate {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

/// Parameter bag supplied at construction or stored as a kind template
///
/// Later layers override earlier ones through [`ErrorParams::merge`].
#[derive(Debug, Clone, Default)]
pub struct ErrorParams {
    message: Option<MessageTemplate>,
    user_message: Option<MessageTemplate>,
    attributes: Params,
}

impl ErrorParams {
    /// Empty bag; every default applies
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the developer-facing message
    #[must_use]
    pub fn message(mut self, message: impl Into<MessageTemplate>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Compute the developer-facing message from the attributes
    #[must_use]
    pub fn message_fn<F>(self, resolver: F) -> Self
    where
        F: Fn(&Params) -> String + Send + Sync + 'static,
    {
        self.message(MessageTemplate::from_fn(resolver))
    }

    /// Set the end-user-facing message
    #[must_use]
    pub fn user_message(mut self, user_message: impl Into<MessageTemplate>) -> Self {
        self.user_message = Some(user_message.into());
        self
    }

    /// Compute the end-user-facing message from the attributes
    #[must_use]
    pub fn user_message_fn<F>(self, resolver: F) -> Self
    where
        F: Fn(&Params) -> String + Send + Sync + 'static,
    {
        self.user_message(MessageTemplate::from_fn(resolver))
    }

    /// Set the conventional `status` attribute
    #[must_use]
    pub fn status(self, status: u16) -> Self {
        self.attribute("status", status)
    }

    /// Add an attribute
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add an attribute in place
    ///
    /// `message` and `user_message` keys set the corresponding literal
    /// instead of becoming attributes.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();

        match key.as_str() {
            "message" => self.message = Some(MessageTemplate::Literal(display_value(&value))),
            "user_message" => self.user_message = Some(MessageTemplate::Literal(display_value(&value))),
            _ => {
                self.attributes.insert(key, value);
            }
        }
    }

    /// Message template, if this layer sets one
    pub fn message_template(&self) -> Option<&MessageTemplate> {
        self.message.as_ref()
    }

    /// User message template, if this layer sets one
    pub fn user_message_template(&self) -> Option<&MessageTemplate> {
        self.user_message.as_ref()
    }

    /// Attributes set by this layer
    pub fn attributes(&self) -> &Params {
        &self.attributes
    }

    /// Status set by this layer
    pub fn status_code(&self) -> Option<u16> {
        status_of(&self.attributes)
    }

    /// Overlay `other` on top of `self`
    ///
    /// Any message set in `other` replaces ours, including an empty
    /// literal, which then resolves to the global default. Attributes are
    /// replaced key by key.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        if other.message.is_some() {
            self.message = other.message;
        }
        if other.user_message.is_some() {
            self.user_message = other.user_message;
        }
        self.attributes.extend(other.attributes);
        self
    }

    pub(crate) fn into_parts(self) -> (Option<MessageTemplate>, Option<MessageTemplate>, Params) {
        (self.message, self.user_message, self.attributes)
    }
}

impl<K, V> FromIterator<(K, V)> for ErrorParams
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
