use std::fmt;
use std::sync::Arc;

use convert_case::{Case, Casing};

use crate::error::KindError;
use crate::params::ErrorParams;

/// Descriptor of an error kind
///
/// Cheap to clone; clones refer to the same kind. A kind holds its parent
/// directly, so the chain is fixed once the kind exists.
#[derive(Clone)]
pub struct ErrorKind(Arc<KindInner>);

struct KindInner {
    name: String,
    error_type: String,
    parent: Option<ErrorKind>,
    template: ErrorParams,
    defaults: ErrorParams,
}

impl ErrorKind {
    /// Create a kind with no parent
    pub fn root(name: impl Into<String>, template: ErrorParams) -> Self {
        Self::build(name.into(), None, template)
    }

    /// Create a kind that specializes `parent`
    ///
    /// The parent's defaults are flattened under `template` right away.
    pub fn derive(parent: &Self, name: impl Into<String>, template: ErrorParams) -> Self {
        Self::build(name.into(), Some(parent.clone()), template)
    }

    fn build(name: String, parent: Option<Self>, template: ErrorParams) -> Self {
        let defaults = match &parent {
            Some(parent) => parent.defaults().clone().merge(template.clone()),
            None => template.clone(),
        };

        Self(Arc::new(KindInner {
            error_type: name.to_case(Case::Snake),
            name,
            parent,
            template,
            defaults,
        }))
    }

    /// Name given to instances of this kind
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Machine-readable form of the name (e.g. `url_not_found_error`)
    pub fn error_type(&self) -> &str {
        &self.0.error_type
    }

    /// Kind this one specializes
    pub fn parent(&self) -> Option<&Self> {
        self.0.parent.as_ref()
    }

    /// Template declared by this kind alone
    pub fn template(&self) -> &ErrorParams {
        &self.0.template
    }

    /// Template merged over every ancestor's template
    pub fn defaults(&self) -> &ErrorParams {
        &self.0.defaults
    }

    /// Status instances get when the caller does not override it
    pub fn default_status(&self) -> Option<u16> {
        self.defaults().status_code()
    }

    /// This kind followed by its ancestors, nearest first
    pub fn ancestors(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |kind| kind.parent())
    }

    /// Whether both handles refer to the same kind
    pub fn same_kind(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Whether this kind is `other` or descends from it
    pub fn is_subkind_of(&self, other: &Self) -> bool {
        self.ancestors().any(|kind| kind.same_kind(other))
    }

    /// Construct an instance with every default applied
    pub fn new_error(&self) -> KindError {
        KindError::new(self, ErrorParams::default())
    }

    /// Construct an instance with caller parameters over the defaults
    pub fn with(&self, params: impl Into<ErrorParams>) -> KindError {
        KindError::new(self, params.into())
    }
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        self.same_kind(other)
    }
}

impl Eq for ErrorKind {}

impl fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorKind")
            .field("name", &self.name())
            .field("parent", &self.parent().map(Self::name))
            .field("template", self.template())
            .finish()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
