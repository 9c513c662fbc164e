//! # objval
//!
//! Declarative validation of in-memory object graphs.
//!
//! Rules are attached to properties of a borrowed object through a
//! [`Validator`]. Each rule is registered on a shared [`ValidationCommand`]
//! under the fully qualified path of its property; nested objects and
//! collections get validators of their own whose paths are prefixed with the
//! parent path (`Person.FirstName`, `Attachments[1].FileName`).
//!
//! Running the command evaluates rules in registration order and stops
//! checking a property as soon as one of its rules fails, so each property
//! reports at most one error.
//!
//! ## Example
//!
//! ```rust
//! use objval::prelude::*;
//!
//! #[derive(Properties)]
//! struct Message {
//!     #[property(display = "Message subject")]
//!     subject: String,
//!     attachments: Vec<Attachment>,
//! }
//!
//! #[derive(Properties)]
//! struct Attachment {
//!     file_name: String,
//! }
//!
//! # async fn example() -> Result<(), objval::Error> {
//! let message = Message {
//!     subject: String::new(),
//!     attachments: vec![Attachment { file_name: "notes.txt".into() }],
//! };
//!
//! let validator = validator_of(&message);
//! validator.bind(Message::SUBJECT).not_empty().length(3, 50);
//! for attachment in validator.bind(Message::ATTACHMENTS).validators_for() {
//!     attachment.bind(Attachment::FILE_NAME).not_empty();
//! }
//!
//! let errors = validator.validate().await?;
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].property_path, "Subject");
//! assert_eq!(errors[0].message, "'Message subject' should not be empty.");
//! # Ok(())
//! # }
//! ```
//!
//! ## Messages
//!
//! Errors carry a stable `code` and a message rendered from a template looked
//! up by that code in a [`MessageProvider`]. The English catalog is used by
//! default; [`ValidatorBuilder::messages`] swaps it for another one.
//!
//! ## Feature flags
//!
//! - `tracing` (default): log rule registration, validation passes and
//!   missing message templates through `tracing`.

#[macro_use]
mod trace_macros;

mod binding;
mod builder;
mod command;
mod context;
mod error;
mod formatter;
mod messages;
mod property;
pub mod rules;
mod traits;
mod validator;


extern crate self as objval;

pub use binding::{Elements, NestedValidators, PropertyBinding};
pub use builder::ValidatorBuilder;
pub use command::{RuleResult, ValidationCommand};
pub use context::PropertyContext;
pub use error::{BoxError, Error, ErrorInfo, Violation};
pub use formatter::{substitute, MessageFormatter};
pub use messages::{ErrorMessage, MessageProvider, MessageTable};
pub use property::Property;
pub use rules::{
    IsEmpty, LengthRule, NotEmptyRule, NotEqualRule, NotNullRule, Nullable, TextLength,
};
pub use traits::{AsyncValidationRule, ValidationRule};
pub use validator::{validator_of, Validator};

/// Derive property descriptors for a struct.
///
/// Generates one associated `const` [`Property`] per named field, called
/// after the field in `SCREAMING_SNAKE_CASE` and named in `PascalCase`:
///
/// ```rust
/// use objval::Properties;
///
/// #[derive(Properties)]
/// struct Person {
///     first_name: String,
///     #[property(name = "Surname", display = "Last name")]
///     last_name: String,
///     #[property(skip)]
///     cache: Vec<u8>,
/// }
///
/// assert_eq!(Person::FIRST_NAME.name(), "FirstName");
/// assert_eq!(Person::LAST_NAME.name(), "Surname");
/// assert_eq!(Person::LAST_NAME.display_name(), "Last name");
/// ```
pub use objval_macros::Properties;

/// Re-exports for validating objects.
pub mod prelude {
    pub use crate::{
        validator_of, AsyncValidationRule, ErrorInfo, ErrorMessage, MessageFormatter,
        MessageProvider, MessageTable, Properties, Property, PropertyBinding, PropertyContext,
        ValidationRule, Validator, Violation,
    };
}
