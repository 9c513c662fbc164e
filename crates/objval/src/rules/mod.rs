//! Built-in validation rules and the value traits they are defined over.

mod sync_rules;
mod values;

pub use sync_rules::*;
pub use values::*;
