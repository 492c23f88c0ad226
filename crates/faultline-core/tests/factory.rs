use faultline_core::{
    ErrorParams, FixedKind, KindDefinition, NotFoundError, Registry, ServerError, UrlNotFoundError, define,
};
use serde_json::json;

#[test]
fn default_definition_behaves_like_server_error() {
    let mut registry = Registry::new();
    define(&mut registry, KindDefinition::new("MyError"));

    let error = registry["MyError"].new_error();
    let server = ServerError::new_error();

    assert_eq!(error.name(), "MyError");
    assert_eq!(error.message(), server.message());
    assert_eq!(error.user_message(), server.user_message());
    assert_eq!(error.status(), server.status());
    assert_eq!(error.attributes(), server.attributes());
    assert!(error.trace().to_string().starts_with("MyError: Internal server error"));
    assert!(error.is(ServerError::kind()));
}

#[test]
fn custom_template() {
    let mut registry = Registry::new();
    define(
        &mut registry,
        KindDefinition::new("MyError").message("my message").user_message("my user message"),
    );

    let error = registry["MyError"].new_error();

    assert_eq!(error.name(), "MyError");
    assert_eq!(error.message(), "my message");
    assert_eq!(error.user_message(), "my user message");
    assert_eq!(error.status(), Some(500));
    assert!(error.trace().to_string().starts_with("MyError: my message"));
}

#[test]
fn construction_params_override_template() {
    let mut registry = Registry::new();
    let kind = registry.define(
        KindDefinition::new("QuotaError")
            .status(429)
            .message("Quota exceeded")
            .attribute("retryable", true),
    );

    let error = kind.with(ErrorParams::new().message("Quota of 10 exceeded").attribute("limit", 10));

    assert_eq!(error.message(), "Quota of 10 exceeded");
    assert_eq!(error.user_message(), "Внутренняя ошибка сервера");
    assert_eq!(error.status(), Some(429));
    assert_eq!(error.attribute("retryable"), Some(&json!(true)));
    assert_eq!(error.attribute("limit"), Some(&json!(10)));
}

#[test]
fn explicit_parent() {
    let mut registry = Registry::new();
    let kind = registry.define(
        KindDefinition::new("PageMissingError")
            .parent(UrlNotFoundError::kind())
            .user_message("Нет такой страницы"),
    );

    let error = kind.with(ErrorParams::new().attribute("url", "/about"));

    assert_eq!(error.message(), r#"Url "/about" is not found"#);
    assert_eq!(error.user_message(), "Нет такой страницы");
    assert_eq!(error.status(), Some(404));
    assert!(error.is(NotFoundError::kind()));
}

#[test]
fn chained_definitions() {
    let mut registry = Registry::new();
    let billing = registry.define(
        KindDefinition::new("BillingError")
            .status(402)
            .attribute("area", "billing"),
    );
    let invoice = registry.define(
        KindDefinition::new("InvoiceError")
            .parent(&billing)
            .message_fn(|params| format!("Invoice {} failed", params["invoice"])),
    );
    let overdue = registry.define(
        KindDefinition::new("OverdueInvoiceError")
            .parent(&invoice)
            .user_message("Счёт просрочен"),
    );

    let error = overdue.with(ErrorParams::new().attribute("invoice", 17));

    assert_eq!(error.name(), "OverdueInvoiceError");
    assert_eq!(error.message(), "Invoice 17 failed");
    assert_eq!(error.user_message(), "Счёт просрочен");
    assert_eq!(error.status(), Some(402));
    assert_eq!(error.attribute("area"), Some(&json!("billing")));
    assert!(error.is(&billing));
    assert!(error.is(&invoice));
    assert!(error.is(ServerError::kind()));
}

#[test]
fn parent_is_resolved_at_definition_time() {
    let mut registry = Registry::new();
    let parent = registry.define(KindDefinition::new("ParentError").status(418).message("teapot"));
    let child = registry.define(KindDefinition::new("ChildError").parent(&parent));

    registry.define(KindDefinition::new("ParentError").status(503).message("replaced"));

    let error = child.new_error();
    assert_eq!(error.status(), Some(418));
    assert_eq!(error.message(), "teapot");
    assert!(error.is(&parent));
    assert!(!error.is(&registry["ParentError"]));
}

#[test]
fn name_collision_last_writer_wins() {
    let mut registry = Registry::with_builtins();
    registry.define(KindDefinition::new("NotFoundError").message("shadowed"));

    assert_eq!(registry["NotFoundError"].new_error().message(), "shadowed");
    assert_eq!(NotFoundError::new_error().message(), "Entity is not found");
}

#[test]
fn renaming_an_instance() {
    let mut registry = Registry::new();
    let kind = registry.define(KindDefinition::new("MyError"));

    let mut error = kind.new_error();
    error.set_name("RenamedError");

    assert_eq!(error.name(), "RenamedError");
    assert_eq!(error.to_string(), "RenamedError: Internal server error");
    assert_eq!(error.kind().name(), "MyError");
}

#[test]
fn empty_template_message_does_not_inherit() {
    let mut registry = Registry::new();
    let kind = registry.define(KindDefinition::new("BlankError").message(""));

    let error = kind.new_error();
    assert_eq!(error.message(), "Error has occurred");
    assert_eq!(error.user_message(), "Внутренняя ошибка сервера");
    assert_eq!(error.status(), Some(500));
    assert!(error.trace().head().starts_with("BlankError: Error has occurred"));
}
