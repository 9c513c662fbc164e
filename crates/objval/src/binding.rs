//! Property bindings: the unit rules are attached to.

use crate::command::ValidationCommand;
use crate::context::PropertyContext;
use crate::error::{BoxError, ErrorInfo};
use crate::messages::MessageProvider;
use crate::property::Property;
use crate::rules::{
    IsEmpty, LengthRule, NotEmptyRule, NotEqualRule, NotNullRule, Nullable, TextLength,
};
use crate::traits::{AsyncValidationRule, ValidationRule};
use crate::validator::Validator;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::iter::{Enumerate, FusedIterator};
use std::ops::Deref;
use std::slice;
use std::sync::Arc;

/// A property of a validated object, bound to its validator.
///
/// The binding knows the fully qualified property path (the validator's
/// prefix followed by the property name) and reads the value from the live
/// object on every access. Attaching a rule registers it for that path on the
/// shared [`ValidationCommand`]; every attachment method returns the binding
/// so rules can be chained.
///
/// The display name is fixed when the binding is created (see
/// [`Validator::bind_as`]), so every rule attached to it reports the same one.
///
/// The binding dereferences to its [`PropertyContext`], which provides
/// `value()`, `object()`, `property_path()`, `display_name()` and the
/// `create_error_info` family.
pub struct PropertyBinding<'a, T: ?Sized, V: ?Sized> {
    validator: Validator<'a, T>,
    context: PropertyContext<'a, T, V>,
}

impl<'a, T: ?Sized, V: ?Sized> PropertyBinding<'a, T, V> {
    pub(crate) fn new(
        validator: Validator<'a, T>,
        property: Property<T, V>,
        display_name: Option<Cow<'static, str>>,
    ) -> Self {
        let mut context = PropertyContext::new(
            validator.object(),
            property,
            validator.property_prefix(),
            Arc::clone(validator.messages_arc()),
        );
        if let Some(display_name) = display_name {
            context.set_display_name(display_name);
        }
        Self { validator, context }
    }

    /// The owning validator.
    pub fn validator(&self) -> &Validator<'a, T> {
        &self.validator
    }

    /// The shared command rules are registered on.
    pub fn command(&self) -> &Arc<ValidationCommand<'a>> {
        self.validator.command()
    }

    /// The view of this property handed to rules.
    pub fn context(&self) -> &PropertyContext<'a, T, V> {
        &self.context
    }
}

impl<'a, T: ?Sized, V: ?Sized + 'a> PropertyBinding<'a, T, V> {
    /// A validator for the bound value, sharing this binding's command.
    ///
    /// Paths of the nested validator are prefixed with `"{property_path}."`.
    pub fn validator_for(&self) -> Validator<'a, V> {
        Validator::nested(
            self.value(),
            Arc::clone(self.command()),
            format!("{}.", self.property_path()),
            Arc::clone(self.context.messages_arc()),
        )
    }

    /// One validator per element of the bound sequence, in order.
    ///
    /// Element paths are prefixed with `"{property_path}[{index}]."`. An
    /// absent sequence yields no validators.
    pub fn validators_for(&self) -> NestedValidators<'a, V::Item>
    where
        V: Elements,
        V::Item: 'a,
    {
        NestedValidators {
            items: self.value().elements().iter().enumerate(),
            command: Arc::clone(self.command()),
            messages: Arc::clone(self.context.messages_arc()),
            property_path: Arc::clone(self.context.property_path_arc()),
        }
    }
}

impl<'a, T: ?Sized, U: 'a> PropertyBinding<'a, T, Option<U>> {
    /// A validator for the bound value when it is present.
    pub fn validator_for_some(&self) -> Option<Validator<'a, U>> {
        let value = self.value().as_ref()?;
        Some(Validator::nested(
            value,
            Arc::clone(self.command()),
            format!("{}.", self.property_path()),
            Arc::clone(self.context.messages_arc()),
        ))
    }
}

impl<'a, T, V> PropertyBinding<'a, T, V>
where
    T: ?Sized + Sync + 'a,
    V: ?Sized + 'a,
{
    /// Attach a synchronous rule.
    ///
    /// The rule receives the property context and returns an error or `None`.
    pub fn add<F>(self, rule: F) -> Self
    where
        F: Fn(&PropertyContext<'a, T, V>) -> Option<ErrorInfo> + Send + Sync + 'a,
    {
        let context = self.context.clone();
        self.command()
            .add(self.property_path(), move || rule(&context));
        self
    }

    /// Attach an asynchronous rule.
    pub fn add_async<F, Fut>(self, rule: F) -> Self
    where
        F: Fn(PropertyContext<'a, T, V>) -> Fut + Send + Sync + 'a,
        Fut: Future<Output = Option<ErrorInfo>> + Send + 'a,
    {
        let context = self.context.clone();
        self.command()
            .add_async(self.property_path(), move || rule(context.clone()));
        self
    }

    /// Attach a synchronous rule that may fault; a fault aborts validation.
    pub fn try_add<F, E>(self, rule: F) -> Self
    where
        F: Fn(&PropertyContext<'a, T, V>) -> Result<Option<ErrorInfo>, E> + Send + Sync + 'a,
        E: Into<BoxError>,
    {
        let context = self.context.clone();
        self.command()
            .try_add(self.property_path(), move || rule(&context));
        self
    }

    /// Attach an asynchronous rule that may fault; a fault aborts validation.
    pub fn try_add_async<F, Fut, E>(self, rule: F) -> Self
    where
        F: Fn(PropertyContext<'a, T, V>) -> Fut + Send + Sync + 'a,
        Fut: Future<Output = Result<Option<ErrorInfo>, E>> + Send + 'a,
        E: Into<BoxError>,
    {
        let context = self.context.clone();
        self.command()
            .try_add_async(self.property_path(), move || rule(context.clone()));
        self
    }

    /// Attach a [`ValidationRule`].
    pub fn rule<R>(self, rule: R) -> Self
    where
        R: ValidationRule<V> + 'a,
    {
        trace_debug!(rule = rule.rule_name(), path = self.property_path(), "attaching rule");
        self.add(move |context| match rule.validate(context.value()) {
            Ok(()) => None,
            Err(violation) => Some(context.create_violation_error(&violation)),
        })
    }

    /// Attach an [`AsyncValidationRule`].
    pub fn rule_async<R>(self, rule: R) -> Self
    where
        R: AsyncValidationRule<V> + 'a,
        V: Sync,
    {
        trace_debug!(rule = rule.rule_name(), path = self.property_path(), "attaching async rule");
        let rule = Arc::new(rule);
        self.add_async(move |context| {
            let rule = Arc::clone(&rule);
            async move {
                match rule.validate_async(context.value()).await {
                    Ok(()) => None,
                    Err(violation) => Some(context.create_violation_error(&violation)),
                }
            }
        })
    }

    /// Fail when the value is empty: a blank string, an empty collection or
    /// the zero value of its type.
    pub fn not_empty(self) -> Self
    where
        V: IsEmpty,
    {
        self.rule(NotEmptyRule::new())
    }

    /// Fail when the value is absent.
    pub fn not_null(self) -> Self
    where
        V: Nullable,
    {
        self.rule(NotNullRule::new())
    }

    /// Fail when the value equals `comparison_value`.
    pub fn not_equal<C>(self, comparison_value: C) -> Self
    where
        V: PartialEq<C>,
        C: Serialize + fmt::Debug + Send + Sync + 'a,
    {
        self.rule(NotEqualRule::new(comparison_value))
    }

    /// Fail when the text length lies outside `min..=max`.
    pub fn length(self, min: usize, max: usize) -> Self
    where
        V: TextLength,
    {
        self.rule(LengthRule::new(min, max))
    }
}

impl<'a, T: ?Sized, V: ?Sized> Deref for PropertyBinding<'a, T, V> {
    type Target = PropertyContext<'a, T, V>;

    fn deref(&self) -> &Self::Target {
        &self.context
    }
}

impl<T: ?Sized, V: ?Sized> Clone for PropertyBinding<'_, T, V> {
    fn clone(&self) -> Self {
        Self {
            validator: self.validator.clone(),
            context: self.context.clone(),
        }
    }
}

impl<T: ?Sized, V: ?Sized> fmt::Debug for PropertyBinding<'_, T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyBinding")
            .field("property_path", &self.property_path())
            .field("display_name", &self.display_name())
            .finish_non_exhaustive()
    }
}

/// Values holding a sequence of nested entities.
///
/// An absent sequence (`None`) has no elements.
pub trait Elements {
    /// Element type.
    type Item;

    /// The elements, in order.
    fn elements(&self) -> &[Self::Item];
}

impl<E> Elements for [E] {
    type Item = E;

    fn elements(&self) -> &[E] {
        self
    }
}

impl<E, const N: usize> Elements for [E; N] {
    type Item = E;

    fn elements(&self) -> &[E] {
        self
    }
}

impl<E> Elements for Vec<E> {
    type Item = E;

    fn elements(&self) -> &[E] {
        self
    }
}

impl<C: Elements + ?Sized> Elements for Box<C> {
    type Item = C::Item;

    fn elements(&self) -> &[C::Item] {
        (**self).elements()
    }
}

impl<C: Elements> Elements for Option<C> {
    type Item = C::Item;

    fn elements(&self) -> &[C::Item] {
        match self {
            Some(elements) => elements.elements(),
            None => &[],
        }
    }
}

/// Lazy sequence of validators, one per element of a bound sequence.
///
/// Created by [`PropertyBinding::validators_for`].
pub struct NestedValidators<'a, E> {
    items: Enumerate<slice::Iter<'a, E>>,
    command: Arc<ValidationCommand<'a>>,
    messages: Arc<dyn MessageProvider>,
    property_path: Arc<str>,
}

impl<'a, E> Iterator for NestedValidators<'a, E> {
    type Item = Validator<'a, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, item) = self.items.next()?;
        Some(Validator::nested(
            item,
            Arc::clone(&self.command),
            format!("{}[{}].", self.property_path, index),
            Arc::clone(&self.messages),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<E> ExactSizeIterator for NestedValidators<'_, E> {}

impl<E> FusedIterator for NestedValidators<'_, E> {}

impl<E> fmt::Debug for NestedValidators<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestedValidators")
            .field("property_path", &self.property_path)
            .field("remaining", &self.items.len())
            .finish()
    }
}
