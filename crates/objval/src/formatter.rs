//! Named placeholder substitution for message templates.
//!
//! Placeholders have the form `{Name}`. A template is scanned once, left to
//! right: every recognised placeholder is replaced by its value, anything else
//! (unknown names, stray braces) is copied verbatim. Substituted text is never
//! scanned again, so values cannot inject further placeholders.

use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;

/// Replace `{name}` placeholders in `template` with the given values.
///
/// When a name appears more than once in `pairs` the first occurrence wins.
/// An absent value renders as an empty string.
///
/// ```
/// use objval::substitute;
///
/// let text = substitute("'{Subject}' / '{Body}'", &[("Subject", Some("hi")), ("Body", None)]);
/// assert_eq!(text, "'hi' / ''");
/// ```
pub fn substitute<N, V>(template: &str, pairs: &[(N, Option<V>)]) -> String
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    render(template, |name| {
        pairs
            .iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| Cow::Borrowed(value.as_ref().map_or("", |v| v.as_ref())))
    })
}

/// Builder collecting named placeholder values.
///
/// Values are captured through `serde_json`, so anything serializable can be
/// used. `null` (e.g. `None`) renders as an empty string and strings render
/// without quotes.
///
/// ```
/// use objval::MessageFormatter;
///
/// let text = MessageFormatter::new()
///     .param("MinLength", 3)
///     .param("MaxLength", 5)
///     .format("between {MinLength} and {MaxLength}");
/// assert_eq!(text, "between 3 and 5");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageFormatter {
    params: Vec<(String, Value)>,
}

impl MessageFormatter {
    /// Create an empty formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named value.
    pub fn param(mut self, name: impl Into<String>, value: impl Serialize) -> Self {
        self.push(name, value);
        self
    }

    /// Add a named value in place.
    ///
    /// A value that fails to serialize is logged and renders as absent.
    pub fn push(&mut self, name: impl Into<String>, value: impl Serialize) {
        let name = name.into();
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(_error) => {
                trace_warn!(
                    param = %name,
                    error = %_error,
                    "placeholder value failed to serialize, rendering as empty"
                );
                Value::Null
            }
        };
        self.params.push((name, value));
    }

    /// Check if no values were added.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Substitute the collected values into `template`.
    pub fn format(&self, template: &str) -> String {
        render(template, |name| {
            self.params
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| render_value(value))
        })
    }
}

fn render_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        _ => Cow::Owned(value.to_string()),
    }
}

fn render<'v, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<Cow<'v, str>>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find(|c| c == '{' || c == '}') {
            Some(end) if after.as_bytes()[end] == b'}' => {
                let name = &after[..end];
                match lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            // No closing brace before the next opening one: stray brace
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
