use std::sync::OnceLock;

use faultline_core::{MessageTemplate, Params, display_value};
use regex::{Captures, Regex};

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([a-zA-Z0-9_]+)\}").expect("must be valid regex"))
}

/// Replace `{key}` placeholders with attribute values
///
/// Placeholders without a matching attribute stay as written.
pub fn interpolate(template: &str, params: &Params) -> String {
    placeholder()
        .replace_all(template, |captures: &Captures<'_>| match params.get(&captures[1]) {
            Some(value) => display_value(value),
            None => captures[0].to_owned(),
        })
        .into_owned()
}

/// Message resolver that interpolates `template` at construction time
pub fn message_template(template: &str) -> MessageTemplate {
    let template = template.to_owned();
    MessageTemplate::from_fn(move |params| interpolate(&template, params))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn substitutes_known_keys() {
        let mut params = Params::new();
        params.insert("invoice".to_owned(), json!("INV-7"));
        params.insert("amount".to_owned(), json!(12.5));

        assert_eq!(
            interpolate("Invoice {invoice} for {amount} is unpaid", &params),
            "Invoice INV-7 for 12.5 is unpaid"
        );
    }

    #[test]
    fn unknown_keys_stay_verbatim() {
        assert_eq!(interpolate("Missing {thing}", &Params::new()), "Missing {thing}");
    }

    #[test]
    fn non_placeholder_braces_are_kept() {
        assert_eq!(interpolate("{ not a key } {}", &Params::new()), "{ not a key } {}");
    }
}
