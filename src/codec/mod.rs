//! Text ⇄ structure codec for choice and default-value lists.
//!
//! Both directions are pure transforms. Parsing never fails: a line
//! without a separator falls back to using the whole line as both value
//! and label, and blank lines are dropped without leaving gaps in the
//! output.

mod lines;
mod options;
mod values;

pub use options::{format_choices, parse_choices, Choice};
pub use values::{format_values, parse_values};

/// The literal token separating a value from its label on one line.
pub const SEPARATOR: &str = " : ";
