//! Rule traits.

use crate::error::Violation;
use async_trait::async_trait;
use std::fmt::Debug;

/// A reusable synchronous check over a property value.
///
/// Attach with [`PropertyBinding::rule`](crate::PropertyBinding::rule).
///
/// ## Example
///
/// ```rust
/// use objval::{ErrorMessage, ValidationRule, Violation};
///
/// #[derive(Debug)]
/// struct PositiveRule;
///
/// impl ValidationRule<i32> for PositiveRule {
///     fn validate(&self, value: &i32) -> Result<(), Violation> {
///         if *value > 0 {
///             Ok(())
///         } else {
///             Err(Violation::new(ErrorMessage::literal(
///                 "positive_error",
///                 "'{PropertyName}' must be positive.",
///             )))
///         }
///     }
///
///     fn rule_name(&self) -> &'static str {
///         "positive"
///     }
/// }
///
/// assert!(PositiveRule.validate(&1).is_ok());
/// assert!(PositiveRule.validate(&0).is_err());
/// ```
pub trait ValidationRule<V: ?Sized>: Debug + Send + Sync {
    /// Check the value.
    fn validate(&self, value: &V) -> Result<(), Violation>;

    /// Get the rule name for logging.
    fn rule_name(&self) -> &'static str;
}

/// A reusable asynchronous check, for rules that await external lookups.
///
/// Attach with [`PropertyBinding::rule_async`](crate::PropertyBinding::rule_async).
#[async_trait]
pub trait AsyncValidationRule<V: ?Sized + Sync>: Debug + Send + Sync {
    /// Check the value asynchronously.
    async fn validate_async(&self, value: &V) -> Result<(), Violation>;

    /// Get the rule name for logging.
    fn rule_name(&self) -> &'static str;
}
