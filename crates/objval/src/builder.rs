//! Root validator configuration.

use crate::messages::{MessageProvider, MessageTable};
use crate::validator::Validator;
use std::sync::Arc;

/// Builder for a root [`Validator`].
///
/// ## Example
///
/// ```rust
/// use objval::{MessageProvider, MessageTable, Validator};
///
/// struct Letter {
///     subject: String,
/// }
///
/// let letter = Letter { subject: String::new() };
/// let german = MessageTable::english()
///     .with("notempty_error", "'{PropertyName}' darf nicht leer sein.");
///
/// let validator = Validator::builder().messages(german).build(&letter);
/// assert!(validator.messages().template("notempty_error").is_some());
/// ```
#[derive(Default)]
pub struct ValidatorBuilder {
    messages: Option<Arc<dyn MessageProvider>>,
}

impl ValidatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message provider.
    pub fn messages(mut self, messages: impl MessageProvider + 'static) -> Self {
        self.messages = Some(Arc::new(messages));
        self
    }

    /// Set the message provider from an Arc.
    pub fn messages_arc(mut self, messages: Arc<dyn MessageProvider>) -> Self {
        self.messages = Some(messages);
        self
    }

    /// Build a root validator for `object`.
    ///
    /// Without a configured provider the English catalog is used.
    pub fn build<T: ?Sized>(self, object: &T) -> Validator<'_, T> {
        let messages = self
            .messages
            .unwrap_or_else(|| Arc::new(MessageTable::english()));
        Validator::root(object, messages)
    }
}

impl std::fmt::Debug for ValidatorBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("has_messages", &self.messages.is_some())
            .finish()
    }
}
