//! Error types for the validation engine.

use crate::formatter::MessageFormatter;
use crate::messages::ErrorMessage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Boxed error returned by fallible rules.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// One validation failure.
///
/// Produced only by rule evaluation. `code` and `property_path` are stable
/// across message catalogs; only `message` changes with the locale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Fully qualified path from the validation root (e.g. `Attachments[1].FileName`)
    pub property_path: String,
    /// Human-facing name of the property
    pub display_name: String,
    /// Machine-readable failure code (e.g. `notempty_error`)
    pub code: String,
    /// Rendered, placeholder-substituted message
    pub message: String,
}

impl ErrorInfo {
    /// Create a new error record.
    pub fn new(
        property_path: impl Into<String>,
        display_name: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            property_path: property_path.into(),
            display_name: display_name.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}] {}", self.property_path, self.code, self.message)
    }
}

/// Failure reported by a [`ValidationRule`](crate::ValidationRule).
///
/// Carries the message identity and the rule-specific placeholder values;
/// the binding turns it into an [`ErrorInfo`].
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Message to render
    pub message: ErrorMessage,
    /// Values for rule-specific placeholders
    pub params: MessageFormatter,
}

impl Violation {
    /// Create a violation without placeholder values.
    pub fn new(message: ErrorMessage) -> Self {
        Self {
            message,
            params: MessageFormatter::new(),
        }
    }

    /// Add a placeholder value.
    pub fn param(mut self, name: impl Into<String>, value: impl Serialize) -> Self {
        self.params.push(name, value);
        self
    }
}

/// Top-level error type of the engine.
///
/// Validation failures are never reported through this type; they are
/// [`ErrorInfo`] values in the result list.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A rule faulted while being evaluated. The whole pass is aborted.
    #[error("rule for '{path}' failed: {source}")]
    Rule {
        /// Property path the faulting rule was registered for
        path: String,
        #[source]
        source: BoxError,
    },

    /// A message table could not be parsed.
    #[error("invalid message table: {0}")]
    MessageTable(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn rule(path: impl Into<String>, source: BoxError) -> Self {
        Self::Rule {
            path: path.into(),
            source,
        }
    }
}
