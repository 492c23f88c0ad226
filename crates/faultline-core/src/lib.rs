//! Templated error kinds for faultline
//!
//! Every error carries a developer-facing message, a localized end-user
//! message, a writable name, arbitrary attributes and the trace of where it
//! was constructed. Kinds form a hierarchy: a fixed set of HTTP-flavoured
//! kinds ships with the crate, and [`define`] mints new ones at runtime.
//!
//! Construction merges parameters in strict order: global defaults, then
//! each ancestor's template (root first), then the kind's own template,
//! then whatever the caller passes.
//!
//! ```
//! use faultline_core::{ErrorParams, FixedKind, KindDefinition, Registry, UrlNotFoundError};
//!
//! let error = UrlNotFoundError::with(ErrorParams::new().attribute("url", "https://example.com"));
//! assert_eq!(error.message(), r#"Url "https://example.com" is not found"#);
//! assert_eq!(error.status(), Some(404));
//!
//! let mut registry = Registry::new();
//! registry.define(KindDefinition::new("QuotaError").status(429).message("Quota exceeded"));
//! let error = registry["QuotaError"].new_error();
//! assert_eq!(error.name(), "QuotaError");
//! ```

#![allow(clippy::must_use_candidate)]

pub mod builtin;
mod error;
mod http_error;
mod kind;
mod params;
mod registry;
pub mod trace;

pub use builtin::{
    BaseError, FixedKind, ForbiddenError, NotFoundError, ServerError, UnauthorizedError, UrlNotFoundError,
};
pub use error::{DEFAULT_MESSAGE, DEFAULT_USER_MESSAGE, KindError};
pub use http_error::HttpError;
pub use kind::ErrorKind;
pub use params::{ErrorParams, MessageTemplate, Params, RESERVED_KEYS, display_value, is_reserved};
pub use registry::{KindDefinition, Registry, define};
pub use trace::OriginTrace;
