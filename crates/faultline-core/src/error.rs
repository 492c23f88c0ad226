use std::fmt;

use serde_json::Value;

use crate::kind::ErrorKind;
use crate::params::{ErrorParams, Params, is_reserved, status_of};
use crate::trace::OriginTrace;

/// Message used when no layer supplies one
pub const DEFAULT_MESSAGE: &str = "Error has occurred";

/// User message used when no layer supplies one
pub const DEFAULT_USER_MESSAGE: &str = "Произошла ошибка";

/// An error instance produced by an [`ErrorKind`]
///
/// Carries a developer-facing `message`, an end-user-facing
/// `user_message`, a writable `name`, arbitrary attributes and the trace of
/// where it was constructed.
#[derive(Debug)]
pub struct KindError {
    kind: ErrorKind,
    name: String,
    message: String,
    user_message: String,
    attributes: Params,
    trace: OriginTrace,
}

impl KindError {
    /// Construct an instance of `kind`
    ///
    /// `params` are merged over the kind's defaults. Message resolvers see
    /// the merged attributes minus the reserved keys; a panicking resolver
    /// unwinds through here untouched.
    pub fn new(kind: &ErrorKind, params: ErrorParams) -> Self {
        let merged = kind.defaults().clone().merge(params);
        let (message, user_message, mut attributes) = merged.into_parts();

        attributes.retain(|key, _| !is_reserved(key));

        let message = message
            .and_then(|template| template.resolve(&attributes))
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_owned());
        let user_message = user_message
            .and_then(|template| template.resolve(&attributes))
            .unwrap_or_else(|| DEFAULT_USER_MESSAGE.to_owned());

        let name = kind.name().to_owned();
        let trace = OriginTrace::capture(format!("{name}: {message}"));

        Self {
            kind: kind.clone(),
            name,
            message,
            user_message,
            attributes,
            trace,
        }
    }

    /// Kind that constructed this instance
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rebind the instance name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    /// Value of the `status` attribute, when it is a valid `u16`
    pub fn status(&self) -> Option<u16> {
        status_of(&self.attributes)
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &Params {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Params {
        &mut self.attributes
    }

    pub fn trace(&self) -> &OriginTrace {
        &self.trace
    }

    /// Whether this instance belongs to `kind` or one of its descendants
    pub fn is(&self, kind: &ErrorKind) -> bool {
        self.kind.is_subkind_of(kind)
    }
}

impl fmt::Display for KindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

impl std::error::Error for KindError {}
