//! Value traits giving the built-in rules their meaning per type.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::sync::Arc;

/// Polymorphic emptiness, as checked by [`NotEmptyRule`](super::NotEmptyRule).
///
/// Strings are empty when blank (empty or whitespace only), collections when
/// they have no elements, numbers when zero, `bool` when `false`, `char` when
/// `'\0'`, and `Option` when `None`.
///
/// Structs deriving `Properties` are never empty, so an `Option` of one is
/// empty exactly when absent. Other types with a meaningful default opt in
/// with [`impl_is_empty_default!`](crate::impl_is_empty_default).
pub trait IsEmpty {
    /// Check if the value is empty.
    fn is_empty_value(&self) -> bool;

    /// Emptiness of a value wrapped in `Some`.
    ///
    /// A present string or collection can still be empty; a present number
    /// is never empty, as the default of `Option<number>` is `None`.
    fn is_empty_when_some(&self) -> bool {
        self.is_empty_value()
    }
}

impl IsEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.trim().is_empty()
    }
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.as_str().is_empty_value()
    }
}

impl IsEmpty for Cow<'_, str> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_empty_value()
    }
}

impl<E> IsEmpty for [E] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<E, const N: usize> IsEmpty for [E; N] {
    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

impl<E> IsEmpty for Vec<E> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<E> IsEmpty for VecDeque<E> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsEmpty for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<E, S> IsEmpty for HashSet<E, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<E> IsEmpty for BTreeSet<E> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<V: IsEmpty + ?Sized> IsEmpty for Box<V> {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }

    fn is_empty_when_some(&self) -> bool {
        (**self).is_empty_when_some()
    }
}

impl<V: IsEmpty + ?Sized> IsEmpty for Arc<V> {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }

    fn is_empty_when_some(&self) -> bool {
        (**self).is_empty_when_some()
    }
}

impl<V: IsEmpty> IsEmpty for Option<V> {
    fn is_empty_value(&self) -> bool {
        match self {
            Some(value) => value.is_empty_when_some(),
            None => true,
        }
    }
}

/// Implement [`IsEmpty`] for types whose empty value is their `Default`.
///
/// A value equal to `T::default()` is empty; a value wrapped in `Some` never
/// is, so `None` stays the only empty `Option<T>`. Needs `T: Default +
/// PartialEq`.
///
/// ```
/// use objval::{impl_is_empty_default, IsEmpty};
///
/// #[derive(Default, PartialEq)]
/// enum Priority {
///     #[default]
///     Unset,
///     High,
/// }
///
/// impl_is_empty_default!(Priority);
///
/// assert!(Priority::Unset.is_empty_value());
/// assert!(!Priority::High.is_empty_value());
/// assert!(!Some(Priority::Unset).is_empty_value());
/// assert!(None::<Priority>.is_empty_value());
/// ```
#[macro_export]
macro_rules! impl_is_empty_default {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::IsEmpty for $t {
                fn is_empty_value(&self) -> bool {
                    *self == <$t as ::core::default::Default>::default()
                }

                fn is_empty_when_some(&self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_is_empty_default!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

/// Values that can be absent, as checked by [`NotNullRule`](super::NotNullRule).
pub trait Nullable {
    /// Check if the value is absent.
    fn is_null(&self) -> bool;
}

impl<V> Nullable for Option<V> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

/// Text with a length in characters, as checked by
/// [`LengthRule`](super::LengthRule). An absent text has length 0.
pub trait TextLength {
    /// Number of characters.
    fn text_length(&self) -> usize;
}

impl TextLength for str {
    fn text_length(&self) -> usize {
        self.chars().count()
    }
}

impl TextLength for String {
    fn text_length(&self) -> usize {
        self.as_str().text_length()
    }
}

impl TextLength for Cow<'_, str> {
    fn text_length(&self) -> usize {
        self.as_ref().text_length()
    }
}

impl TextLength for Box<str> {
    fn text_length(&self) -> usize {
        (**self).text_length()
    }
}

impl<S: TextLength> TextLength for Option<S> {
    fn text_length(&self) -> usize {
        self.as_ref().map_or(0, TextLength::text_length)
    }
}
