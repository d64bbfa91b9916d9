//! Line-oriented choice lists for form controls.
//!
//! An administrator authors selectable choices and default values as
//! free-form text, one entry per line, optionally separating a stored
//! value from its display label with ` : `. This crate converts that
//! text to and from the structured lists consumed by form-rendering
//! code, and carries the settings registry of the controls that edit
//! them.

pub mod codec;
pub mod control;

pub use codec::{format_choices, format_values, parse_choices, parse_values, Choice};
pub use control::{
    ControlKind, ControlSettings, SettingDef, SettingError, SettingKind, SettingValue,
};
