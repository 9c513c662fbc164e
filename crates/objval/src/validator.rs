//! Validators: the entry point for binding properties and running rules.

use crate::binding::PropertyBinding;
use crate::builder::ValidatorBuilder;
use crate::command::ValidationCommand;
use crate::error::{Error, ErrorInfo};
use crate::messages::MessageProvider;
use crate::property::Property;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Roots rule registration against a borrowed object.
///
/// A root validator owns a fresh [`ValidationCommand`]. Nested validators
/// (created through [`PropertyBinding::validator_for`] and friends) share
/// that command and only differ in the object they wrap and the property
/// prefix they prepend to paths.
///
/// ```
/// use objval::prelude::*;
///
/// #[derive(Properties)]
/// struct Message {
///     subject: String,
/// }
///
/// # async fn example() {
/// let message = Message { subject: String::new() };
/// let validator = validator_of(&message);
/// validator.bind(Message::SUBJECT).not_empty();
///
/// let errors = validator.validate().await.unwrap();
/// assert_eq!(errors[0].property_path, "Subject");
/// assert_eq!(errors[0].code, "notempty_error");
/// # }
/// ```
pub struct Validator<'a, T: ?Sized> {
    object: &'a T,
    command: Arc<ValidationCommand<'a>>,
    property_prefix: Arc<str>,
    messages: Arc<dyn MessageProvider>,
}

/// Create a root validator for `object` with the default message catalog.
pub fn validator_of<T: ?Sized>(object: &T) -> Validator<'_, T> {
    Validator::new(object)
}

impl<'a, T: ?Sized> Validator<'a, T> {
    /// Create a root validator with the default message catalog.
    pub fn new(object: &'a T) -> Self {
        ValidatorBuilder::new().build(object)
    }

    pub(crate) fn root(object: &'a T, messages: Arc<dyn MessageProvider>) -> Self {
        Self {
            object,
            command: Arc::new(ValidationCommand::new()),
            property_prefix: Arc::from(""),
            messages,
        }
    }

    pub(crate) fn nested(
        object: &'a T,
        command: Arc<ValidationCommand<'a>>,
        property_prefix: String,
        messages: Arc<dyn MessageProvider>,
    ) -> Self {
        Self {
            object,
            command,
            property_prefix: property_prefix.into(),
            messages,
        }
    }

    /// The validated object.
    pub fn object(&self) -> &'a T {
        self.object
    }

    /// The command shared by this validator and all validators nested in it.
    pub fn command(&self) -> &Arc<ValidationCommand<'a>> {
        &self.command
    }

    /// Prefix prepended to property names; empty for the root, otherwise
    /// ending in `.`.
    pub fn property_prefix(&self) -> &str {
        &self.property_prefix
    }

    /// The message provider used to render errors.
    pub fn messages(&self) -> &dyn MessageProvider {
        self.messages.as_ref()
    }

    pub(crate) fn messages_arc(&self) -> &Arc<dyn MessageProvider> {
        &self.messages
    }

    /// Bind a property described by `property`.
    pub fn bind<V: ?Sized>(&self, property: Property<T, V>) -> PropertyBinding<'a, T, V> {
        PropertyBinding::new(self.clone(), property, None)
    }

    /// Bind a property under an explicit display name.
    ///
    /// The display name replaces the descriptor's one for every rule attached
    /// through the returned binding.
    pub fn bind_as<V: ?Sized>(
        &self,
        property: Property<T, V>,
        display_name: impl Into<Cow<'static, str>>,
    ) -> PropertyBinding<'a, T, V> {
        PropertyBinding::new(self.clone(), property, Some(display_name.into()))
    }

    /// Bind a property by explicit name and accessor.
    pub fn property<V: ?Sized>(
        &self,
        name: &'static str,
        accessor: fn(&T) -> &V,
    ) -> PropertyBinding<'a, T, V> {
        self.bind(Property::new(name, accessor))
    }

    /// Run every rule of the shared command.
    ///
    /// Called on a nested validator this still runs the whole shared command,
    /// sibling branches included.
    pub async fn validate(&self) -> Result<Vec<ErrorInfo>, Error> {
        self.command.validate().await
    }
}

impl Validator<'static, ()> {
    /// Create a builder for configuring a root validator.
    ///
    /// The builder is not tied to an object type; the validated object is
    /// supplied to [`ValidatorBuilder::build`].
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }
}

impl<T: ?Sized> Clone for Validator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            object: self.object,
            command: Arc::clone(&self.command),
            property_prefix: Arc::clone(&self.property_prefix),
            messages: Arc::clone(&self.messages),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Validator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("property_prefix", &self.property_prefix)
            .field("command", &self.command)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{ErrorMessage, MessageTable};

    struct Message {
        subject: String,
    }

    #[test]
    fn root_has_empty_prefix_and_fresh_command() {
        let message = Message {
            subject: String::new(),
        };
        let validator = validator_of(&message);
        assert_eq!(validator.property_prefix(), "");
        assert!(validator.command().is_empty());
    }

    #[test]
    fn clones_share_the_command() {
        let message = Message {
            subject: String::new(),
        };
        let validator = Validator::new(&message);
        let clone = validator.clone();
        clone.property("Subject", |m: &Message| &m.subject).add(|_| None);

        assert!(Arc::ptr_eq(validator.command(), clone.command()));
        assert_eq!(validator.command().len(), 1);
    }

    #[test]
    fn builder_needs_no_type_annotations() {
        let message = Message {
            subject: String::new(),
        };
        let validator = Validator::builder()
            .messages(MessageTable::new().with("notempty_error", "{PropertyName} leer"))
            .build(&message);

        let error = validator
            .property("Subject", |m: &Message| &m.subject)
            .create_error_info(&ErrorMessage::NOT_EMPTY);
        assert_eq!(error.message, "Subject leer");
    }

    #[test]
    fn bindings_read_the_validated_object() {
        let message = Message {
            subject: "Hello".to_string(),
        };
        let validator = validator_of(&message);
        let subject = validator.property("Subject", |m: &Message| &m.subject);
        assert_eq!(subject.value(), "Hello");
        assert_eq!(subject.property_path(), "Subject");
    }
}
