//! Message identities and the string-resource lookup behind them.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

const ENGLISH: &[(&str, &str)] = &[
    ("notempty_error", "'{PropertyName}' should not be empty."),
    ("notnull_error", "'{PropertyName}' must not be empty."),
    (
        "notequal_error",
        "'{PropertyName}' should not be equal to '{ComparisonValue}'.",
    ),
    (
        "length_error",
        "'{PropertyName}' must be between {MinLength} and {MaxLength} characters. You entered {TotalLength} characters.",
    ),
];

/// Identity of an error message.
///
/// The `code` is the stable key of the message: it becomes
/// [`ErrorInfo::code`](crate::ErrorInfo) and is used to look up the template in
/// a [`MessageProvider`]. A message may instead carry its own literal template,
/// which is then used regardless of the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorMessage {
    code: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    template: Option<Cow<'static, str>>,
}

impl ErrorMessage {
    /// Value must not be empty.
    pub const NOT_EMPTY: ErrorMessage = ErrorMessage::resource_static("notempty_error");
    /// Value must be present.
    pub const NOT_NULL: ErrorMessage = ErrorMessage::resource_static("notnull_error");
    /// Value must differ from a comparison value.
    pub const NOT_EQUAL: ErrorMessage = ErrorMessage::resource_static("notequal_error");
    /// String length must lie within bounds.
    pub const LENGTH: ErrorMessage = ErrorMessage::resource_static("length_error");

    const fn resource_static(code: &'static str) -> Self {
        Self {
            code: Cow::Borrowed(code),
            template: None,
        }
    }

    /// A message whose template is looked up by `code`.
    pub fn resource(code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            template: None,
        }
    }

    /// A message carrying its own template.
    pub fn literal(
        code: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            code: code.into(),
            template: Some(template.into()),
        }
    }

    /// The stable message code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The literal template, if this message carries one.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Resolve the template text: the literal one first, then `provider`.
    pub fn resolve<'p>(&'p self, provider: &'p dyn MessageProvider) -> Option<Cow<'p, str>> {
        match &self.template {
            Some(template) => Some(Cow::Borrowed(template.as_ref())),
            None => provider.template(&self.code),
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// External string-resource lookup: message code to template text.
///
/// Swapping providers changes rendered messages, never codes or paths.
pub trait MessageProvider: Send + Sync {
    /// Look up the template for `code`.
    fn template(&self, code: &str) -> Option<Cow<'_, str>>;
}

/// In-memory message table.
///
/// ```
/// use objval::MessageTable;
///
/// let table = MessageTable::english().with("TestMessage2", "Test message.");
/// assert_eq!(table.get("TestMessage2"), Some("Test message."));
/// assert!(table.get("notempty_error").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTable {
    templates: HashMap<String, String>,
}

impl MessageTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English catalog.
    pub fn english() -> Self {
        ENGLISH
            .iter()
            .map(|(code, template)| (code.to_string(), template.to_string()))
            .collect()
    }

    /// Load a table from a JSON object of `code: template` pairs.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Insert or replace a template.
    pub fn insert(&mut self, code: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(code.into(), template.into());
    }

    /// Insert or replace a template, builder style.
    pub fn with(mut self, code: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(code, template);
        self
    }

    /// Overlay `other` on this table; entries of `other` win.
    pub fn merge(mut self, other: MessageTable) -> Self {
        self.templates.extend(other.templates);
        self
    }

    /// Get the template for `code`.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.templates.get(code).map(String::as_str)
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the table has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MessageTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            templates: iter
                .into_iter()
                .map(|(code, template)| (code.into(), template.into()))
                .collect(),
        }
    }
}

impl MessageProvider for MessageTable {
    fn template(&self, code: &str) -> Option<Cow<'_, str>> {
        self.get(code).map(Cow::Borrowed)
    }
}
