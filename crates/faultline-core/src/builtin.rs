//! The fixed hierarchy of HTTP-flavoured error kinds
//!
//! ```text
//! BaseError
//! ├── ServerError        500
//! ├── UnauthorizedError  401
//! ├── ForbiddenError     403
//! └── NotFoundError      404
//!     └── UrlNotFoundError
//! ```

use std::sync::LazyLock;

use crate::error::KindError;
use crate::kind::ErrorKind;
use crate::params::{ErrorParams, Params, display_value};

static BASE: LazyLock<ErrorKind> = LazyLock::new(|| ErrorKind::root("BaseError", ErrorParams::new()));

static SERVER: LazyLock<ErrorKind> = LazyLock::new(|| {
    ErrorKind::derive(
        &BASE,
        "ServerError",
        ErrorParams::new()
            .status(500)
            .message("Internal server error")
            .user_message("Внутренняя ошибка сервера"),
    )
});

static UNAUTHORIZED: LazyLock<ErrorKind> = LazyLock::new(|| {
    ErrorKind::derive(
        &BASE,
        "UnauthorizedError",
        ErrorParams::new()
            .status(401)
            .message("Authentication is required")
            .user_message("Для доступа к запрашиваемому ресурсу требуется аутентификация"),
    )
});

static FORBIDDEN: LazyLock<ErrorKind> = LazyLock::new(|| {
    ErrorKind::derive(
        &BASE,
        "ForbiddenError",
        ErrorParams::new()
            .status(403)
            .message("Access denied")
            .user_message("Доступ запрещён"),
    )
});

static NOT_FOUND: LazyLock<ErrorKind> = LazyLock::new(|| {
    ErrorKind::derive(
        &BASE,
        "NotFoundError",
        ErrorParams::new()
            .status(404)
            .message("Entity is not found")
            .user_message("Сущность не найдена"),
    )
});

static URL_NOT_FOUND: LazyLock<ErrorKind> = LazyLock::new(|| {
    ErrorKind::derive(
        &NOT_FOUND,
        "UrlNotFoundError",
        ErrorParams::new()
            .message_fn(url_not_found_message)
            .user_message("Страница не найдена"),
    )
});

fn url_not_found_message(params: &Params) -> String {
    let url = params
        .get("url")
        .filter(|url| !url.is_null())
        .map(display_value)
        .filter(|url| !url.is_empty());

    match url {
        Some(url) => format!("Url \"{url}\" is not found"),
        None => "Url is not found".to_owned(),
    }
}

/// A statically declared error kind
pub trait FixedKind {
    /// Descriptor shared by every instance
    fn kind() -> &'static ErrorKind;

    /// Construct an instance with every default applied
    fn new_error() -> KindError {
        Self::kind().new_error()
    }

    /// Construct an instance with caller parameters over the defaults
    fn with(params: impl Into<ErrorParams>) -> KindError {
        Self::kind().with(params)
    }
}

/// Root of the hierarchy; carries only the global defaults
#[derive(Debug, Clone, Copy)]
pub struct BaseError;

/// Internal failure, status 500
#[derive(Debug, Clone, Copy)]
pub struct ServerError;

/// Missing authentication, status 401
#[derive(Debug, Clone, Copy)]
pub struct UnauthorizedError;

/// Authenticated but not allowed, status 403
#[derive(Debug, Clone, Copy)]
pub struct ForbiddenError;

/// Missing entity, status 404
#[derive(Debug, Clone, Copy)]
pub struct NotFoundError;

/// Missing page; the message mentions the `url` attribute when present
#[derive(Debug, Clone, Copy)]
pub struct UrlNotFoundError;

impl FixedKind for BaseError {
    fn kind() -> &'static ErrorKind {
        &BASE
    }
}

impl FixedKind for ServerError {
    fn kind() -> &'static ErrorKind {
        &SERVER
    }
}

impl FixedKind for UnauthorizedError {
    fn kind() -> &'static ErrorKind {
        &UNAUTHORIZED
    }
}

impl FixedKind for ForbiddenError {
    fn kind() -> &'static ErrorKind {
        &FORBIDDEN
    }
}

impl FixedKind for NotFoundError {
    fn kind() -> &'static ErrorKind {
        &NOT_FOUND
    }
}

impl FixedKind for UrlNotFoundError {
    fn kind() -> &'static ErrorKind {
        &URL_NOT_FOUND
    }
}

impl ServerError {
    /// Construct with just a message; everything else keeps its default
    pub fn from_message(message: impl Into<String>) -> KindError {
        Self::with(ErrorParams::new().message(message.into()))
    }
}

/// Every fixed kind, root first
pub fn all() -> [&'static ErrorKind; 6] {
    [
        BaseError::kind(),
        ServerError::kind(),
        UnauthorizedError::kind(),
        ForbiddenError::kind(),
        NotFoundError::kind(),
        UrlNotFoundError::kind(),
    ]
}
