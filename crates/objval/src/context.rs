//! What a rule sees of the property it validates.

use crate::error::{ErrorInfo, Violation};
use crate::formatter::MessageFormatter;
use crate::messages::{ErrorMessage, MessageProvider};
use crate::property::Property;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A bound property as seen by rules.
///
/// Gives access to the live value, the owning object (for rules comparing
/// sibling properties), the property path and display name, and builds
/// [`ErrorInfo`] values from message templates.
///
/// Every [`PropertyBinding`](crate::PropertyBinding) dereferences to its
/// context. Rules receive the context rather than the binding: the binding
/// holds the command the rule is stored in.
pub struct PropertyContext<'a, T: ?Sized, V: ?Sized> {
    object: &'a T,
    property: Property<T, V>,
    display_name: Cow<'static, str>,
    property_path: Arc<str>,
    messages: Arc<dyn MessageProvider>,
}

impl<'a, T: ?Sized, V: ?Sized> PropertyContext<'a, T, V> {
    pub(crate) fn new(
        object: &'a T,
        property: Property<T, V>,
        property_prefix: &str,
        messages: Arc<dyn MessageProvider>,
    ) -> Self {
        Self {
            object,
            display_name: Cow::Borrowed(property.display_name()),
            property_path: format!("{property_prefix}{}", property.name()).into(),
            property,
            messages,
        }
    }

    pub(crate) fn set_display_name(&mut self, display_name: Cow<'static, str>) {
        self.display_name = display_name;
    }

    /// The current value of the property, read from the live object.
    pub fn value(&self) -> &'a V {
        self.property.get(self.object)
    }

    /// The object owning the property.
    pub fn object(&self) -> &'a T {
        self.object
    }

    /// The unqualified property name.
    pub fn name(&self) -> &'static str {
        self.property.name()
    }

    /// The fully qualified property path.
    pub fn property_path(&self) -> &str {
        &self.property_path
    }

    /// The human-facing property name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The message provider errors are rendered with.
    pub fn messages(&self) -> &dyn MessageProvider {
        self.messages.as_ref()
    }

    pub(crate) fn messages_arc(&self) -> &Arc<dyn MessageProvider> {
        &self.messages
    }

    pub(crate) fn property_path_arc(&self) -> &Arc<str> {
        &self.property_path
    }

    /// Build an error for this property from `message`.
    ///
    /// `{PropertyName}` in the template is replaced by the display name.
    /// Other placeholders are left as they are.
    pub fn create_error_info(&self, message: &ErrorMessage) -> ErrorInfo {
        self.create_error_info_with(message, str::to_owned)
    }

    /// Build an error for this property, passing the template through
    /// `formatter` once `{PropertyName}` has been substituted.
    ///
    /// ```
    /// use objval::prelude::*;
    ///
    /// #[derive(Properties)]
    /// struct Message {
    ///     subject: String,
    ///     body: String,
    /// }
    ///
    /// let message = Message { subject: "Subject1".into(), body: "Body1".into() };
    /// let validator = validator_of(&message);
    /// let subject = validator.bind(Message::SUBJECT);
    ///
    /// let error = subject.create_error_info_with(
    ///     &ErrorMessage::literal("TestMessage3", "Test message '{Subject}', '{Body}'."),
    ///     |text| {
    ///         MessageFormatter::new()
    ///             .param("Subject", subject.value())
    ///             .param("Body", &subject.object().body)
    ///             .format(text)
    ///     },
    /// );
    /// assert_eq!(error.message, "Test message 'Subject1', 'Body1'.");
    /// assert_eq!(error.code, "TestMessage3");
    /// ```
    pub fn create_error_info_with<F>(&self, message: &ErrorMessage, formatter: F) -> ErrorInfo
    where
        F: FnOnce(&str) -> String,
    {
        let template = match message.resolve(self.messages()) {
            Some(template) => template,
            None => {
                trace_warn!(
                    code = message.code(),
                    path = %self.property_path,
                    "no template for message code, rendering the code"
                );
                Cow::Borrowed(message.code())
            }
        };

        let text = MessageFormatter::new()
            .param("PropertyName", self.display_name())
            .format(&template);

        ErrorInfo::new(
            self.property_path.as_ref(),
            self.display_name.as_ref(),
            message.code(),
            formatter(&text),
        )
    }

    /// Build an error from a rule violation.
    pub fn create_violation_error(&self, violation: &Violation) -> ErrorInfo {
        self.create_error_info_with(&violation.message, |text| violation.params.format(text))
    }
}

impl<T: ?Sized, V: ?Sized> Clone for PropertyContext<'_, T, V> {
    fn clone(&self) -> Self {
        Self {
            object: self.object,
            property: self.property,
            display_name: self.display_name.clone(),
            property_path: Arc::clone(&self.property_path),
            messages: Arc::clone(&self.messages),
        }
    }
}

impl<T: ?Sized, V: ?Sized> fmt::Debug for PropertyContext<'_, T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyContext")
            .field("property_path", &self.property_path)
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}
