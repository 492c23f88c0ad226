/// Failure while expanding `{{ env.VAR }}` placeholders
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    /// Variable is unset and has no default
    #[error("environment variable not found: `{0}`")]
    MissingVariable(String),

    /// Placeholder is not scoped with `env.`
    #[error("only variables scoped with 'env.' are supported: `{0}`")]
    UnsupportedScope(String),
}

/// A catalog entry that cannot be turned into an error kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Entry has an empty `name`
    #[error("error kind name must not be empty")]
    EmptyName,

    /// Two entries share a name
    #[error("error kind '{0}' is declared more than once")]
    DuplicateName(String),

    /// `status` is not a valid HTTP status code
    #[error("error kind '{kind}' has invalid status {status}")]
    InvalidStatus {
        /// Offending kind
        kind: String,
        /// Declared status
        status: u16,
    },

    /// Both a literal and a template were given for the same message
    #[error("error kind '{kind}' sets both {field} and {field}_template")]
    ConflictingMessage {
        /// Offending kind
        kind: String,
        /// `message` or `user_message`
        field: &'static str,
    },

    /// `attributes` holds a key that construction resolves itself
    #[error("error kind '{kind}' declares reserved key '{key}' under attributes")]
    ReservedAttribute {
        /// Offending kind
        kind: String,
        /// Reserved key
        key: String,
    },

    /// `parent` names neither a known kind nor an earlier entry
    #[error("error kind '{kind}' refers to unknown parent '{parent}'")]
    UnknownParent {
        /// Offending kind
        kind: String,
        /// Declared parent
        parent: String,
    },
}
