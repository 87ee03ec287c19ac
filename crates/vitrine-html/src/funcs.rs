//! Stock helper functions for templates.
//!
//! Every freshly built collection gets the same helper set, so templates
//! behave identically across reloads.

use minijinja::{Environment, Error, ErrorKind, Value};

/// Registers the stock helpers on a minijinja environment.
///
/// This is the default installer for
/// [`TemplateGroup::new`](crate::TemplateGroup::new). Applications with
/// their own helpers wrap it:
///
/// ```rust
/// use minijinja::Environment;
///
/// fn install(env: &mut Environment<'static>) {
///     vitrine_html::funcs::register(env);
///     env.add_global("server_name", "demo");
/// }
/// ```
pub fn register(env: &mut Environment<'static>) {
    // Pretty-print any context value as indented JSON, for diagnostic pages.
    // Usage: <pre>{{ request | pretty_json }}</pre>
    env.add_filter("pretty_json", |value: Value| -> Result<String, Error> {
        serde_json::to_string_pretty(&value).map_err(|err| {
            Error::new(
                ErrorKind::InvalidOperation,
                format!("value is not JSON-serializable: {}", err),
            )
        })
    });

    // Render a boolean as "yes"/"no" for status tables.
    env.add_filter("yes_no", |value: bool| -> &'static str {
        if value {
            "yes"
        } else {
            "no"
        }
    });
}
