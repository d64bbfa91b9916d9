//! Control settings: what each control registers and how submitted
//! settings move between editable text and stored structure.

mod registry;
mod setting;

pub use registry::{ControlKind, ControlSettings, SettingDef, SettingError};
pub use setting::{SettingKind, SettingValue};
