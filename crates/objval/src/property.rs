//! Reflection-free property descriptors.

use std::fmt;

/// Describes one property of `T`: its name, an optional display name and
/// the accessor reading it from a live object.
///
/// Descriptors are usually generated by `#[derive(Properties)]`, one
/// associated constant per field, but can be written by hand:
///
/// ```
/// use objval::Property;
///
/// struct Message {
///     subject: String,
/// }
///
/// const SUBJECT: Property<Message, String> = Property::new("Subject", |m| &m.subject);
///
/// let message = Message { subject: "Hi".into() };
/// assert_eq!(SUBJECT.name(), "Subject");
/// assert_eq!(SUBJECT.get(&message), "Hi");
/// ```
pub struct Property<T: ?Sized, V: ?Sized> {
    name: &'static str,
    display_name: Option<&'static str>,
    accessor: fn(&T) -> &V,
}

impl<T: ?Sized, V: ?Sized> Property<T, V> {
    /// Create a descriptor named `name`.
    pub const fn new(name: &'static str, accessor: fn(&T) -> &V) -> Self {
        Self {
            name,
            display_name: None,
            accessor,
        }
    }

    /// Set the default display name used in messages.
    pub const fn with_display_name(self, display_name: &'static str) -> Self {
        Self {
            display_name: Some(display_name),
            ..self
        }
    }

    /// The unqualified property name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The display name; the property name when none was set.
    pub fn display_name(&self) -> &'static str {
        self.display_name.unwrap_or(self.name)
    }

    /// Read the property from `object`.
    pub fn get<'o>(&self, object: &'o T) -> &'o V {
        (self.accessor)(object)
    }
}

impl<T: ?Sized, V: ?Sized> Clone for Property<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized, V: ?Sized> Copy for Property<T, V> {}

impl<T: ?Sized, V: ?Sized> fmt::Debug for Property<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .finish()
    }
}
