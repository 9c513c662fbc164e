//! Synchronous built-in rules.

use super::values::{IsEmpty, Nullable, TextLength};
use crate::error::Violation;
use crate::messages::ErrorMessage;
use crate::traits::ValidationRule;
use serde::Serialize;
use std::fmt::Debug;

/// Fails when the value is empty (see [`IsEmpty`]).
#[derive(Debug, Clone)]
pub struct NotEmptyRule {
    /// Message reported on failure
    pub message: ErrorMessage,
}

impl NotEmptyRule {
    /// Create a rule reporting `notempty_error`.
    pub fn new() -> Self {
        Self {
            message: ErrorMessage::NOT_EMPTY,
        }
    }

    /// Report `message` instead.
    pub fn with_message(mut self, message: ErrorMessage) -> Self {
        self.message = message;
        self
    }
}

impl Default for NotEmptyRule {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: IsEmpty + ?Sized> ValidationRule<V> for NotEmptyRule {
    fn validate(&self, value: &V) -> Result<(), Violation> {
        if value.is_empty_value() {
            Err(Violation::new(self.message.clone()))
        } else {
            Ok(())
        }
    }

    fn rule_name(&self) -> &'static str {
        "not_empty"
    }
}

/// Fails when the value is absent (see [`Nullable`]).
#[derive(Debug, Clone)]
pub struct NotNullRule {
    /// Message reported on failure
    pub message: ErrorMessage,
}

impl NotNullRule {
    /// Create a rule reporting `notnull_error`.
    pub fn new() -> Self {
        Self {
            message: ErrorMessage::NOT_NULL,
        }
    }

    /// Report `message` instead.
    pub fn with_message(mut self, message: ErrorMessage) -> Self {
        self.message = message;
        self
    }
}

impl Default for NotNullRule {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Nullable + ?Sized> ValidationRule<V> for NotNullRule {
    fn validate(&self, value: &V) -> Result<(), Violation> {
        if value.is_null() {
            Err(Violation::new(self.message.clone()))
        } else {
            Ok(())
        }
    }

    fn rule_name(&self) -> &'static str {
        "not_null"
    }
}

/// Fails when the value equals the comparison value.
///
/// The comparison value is rendered into `{ComparisonValue}`.
#[derive(Debug, Clone)]
pub struct NotEqualRule<C> {
    /// Value the property must differ from
    pub comparison_value: C,
    /// Message reported on failure
    pub message: ErrorMessage,
}

impl<C> NotEqualRule<C> {
    /// Create a rule reporting `notequal_error`.
    pub fn new(comparison_value: C) -> Self {
        Self {
            comparison_value,
            message: ErrorMessage::NOT_EQUAL,
        }
    }

    /// Report `message` instead.
    pub fn with_message(mut self, message: ErrorMessage) -> Self {
        self.message = message;
        self
    }
}

impl<V, C> ValidationRule<V> for NotEqualRule<C>
where
    V: PartialEq<C> + ?Sized,
    C: Serialize + Debug + Send + Sync,
{
    fn validate(&self, value: &V) -> Result<(), Violation> {
        if *value == self.comparison_value {
            Err(Violation::new(self.message.clone())
                .param("ComparisonValue", &self.comparison_value))
        } else {
            Ok(())
        }
    }

    fn rule_name(&self) -> &'static str {
        "not_equal"
    }
}

/// Fails when the text length in characters lies outside `min..=max`.
///
/// Renders `{MinLength}`, `{MaxLength}` and `{TotalLength}`.
#[derive(Debug, Clone)]
pub struct LengthRule {
    /// Minimum length (inclusive)
    pub min: usize,
    /// Maximum length (inclusive)
    pub max: usize,
    /// Message reported on failure
    pub message: ErrorMessage,
}

impl LengthRule {
    /// Create a rule reporting `length_error`.
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            message: ErrorMessage::LENGTH,
        }
    }

    /// Report `message` instead.
    pub fn with_message(mut self, message: ErrorMessage) -> Self {
        self.message = message;
        self
    }
}

impl<V: TextLength + ?Sized> ValidationRule<V> for LengthRule {
    fn validate(&self, value: &V) -> Result<(), Violation> {
        let length = value.text_length();
        if length < self.min || length > self.max {
            Err(Violation::new(self.message.clone())
                .param("MaxLength", self.max)
                .param("MinLength", self.min)
                .param("TotalLength", length))
        } else {
            Ok(())
        }
    }

    fn rule_name(&self) -> &'static str {
        "length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_empty_rule() {
        let rule = NotEmptyRule::new();

        assert!(ValidationRule::<str>::validate(&rule, "hello").is_ok());
        assert!(ValidationRule::<str>::validate(&rule, "   ").is_err());
        assert!(rule.validate(&vec![1]).is_ok());
        assert!(rule.validate(&Vec::<i32>::new()).is_err());
        assert!(rule.validate(&0i32).is_err());
        assert!(rule.validate(&Some(0i32)).is_ok());
        assert!(rule.validate(&None::<i32>).is_err());

        let violation = rule.validate(&String::new()).unwrap_err();
        assert_eq!(violation.message.code(), "notempty_error");
        assert!(violation.params.is_empty());
    }

    #[test]
    fn not_null_rule() {
        let rule = NotNullRule::new();

        assert!(rule.validate(&Some(1)).is_ok());
        let violation = rule.validate(&None::<String>).unwrap_err();
        assert_eq!(violation.message.code(), "notnull_error");
    }

    #[test]
    fn not_equal_rule() {
        let rule = NotEqualRule::new(7);

        assert!(rule.validate(&8).is_ok());
        let violation = rule.validate(&7).unwrap_err();
        assert_eq!(violation.message.code(), "notequal_error");
        assert_eq!(
            violation.params.format("'{ComparisonValue}'"),
            "'7'"
        );

        let rule = NotEqualRule::new("draft");
        let violation = rule.validate(&"draft").unwrap_err();
        assert_eq!(violation.params.format("'{ComparisonValue}'"), "'draft'");
    }

    #[test]
    fn length_rule() {
        let rule = LengthRule::new(3, 5);

        assert!(rule.validate(&"abc".to_string()).is_ok());
        assert!(rule.validate(&"abcde".to_string()).is_ok());
        assert!(rule.validate(&"ab".to_string()).is_err());

        let violation = rule.validate(&"Subject1".to_string()).unwrap_err();
        assert_eq!(violation.message.code(), "length_error");
        assert_eq!(
            violation.params.format("{MinLength}-{MaxLength}, got {TotalLength}"),
            "3-5, got 8"
        );
    }

    #[test]
    fn length_counts_absent_text_as_zero() {
        let rule = LengthRule::new(1, 5);

        let violation = rule.validate(&None::<String>).unwrap_err();
        assert_eq!(violation.params.format("{TotalLength}"), "0");
        assert!(LengthRule::new(0, 5).validate(&None::<String>).is_ok());
    }

    #[test]
    fn custom_message() {
        let rule = NotEmptyRule::new().with_message(ErrorMessage::resource("TestMessage2"));

        let violation = rule.validate(&String::new()).unwrap_err();
        assert_eq!(violation.message.code(), "TestMessage2");
    }
}
