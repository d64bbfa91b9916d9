use std::collections::HashMap;

use thiserror::Error;

use crate::control::setting::{SettingKind, SettingValue};

/// Errors from the control settings layer.
#[derive(Debug, Error)]
pub enum SettingError {
    #[error("unknown setting '{name}' for {control} control")]
    UnknownSetting { control: &'static str, name: String },
}

/// Static metadata for one registered setting.
///
/// Contains everything the editor surface needs: display label, input
/// kind, default, and the help line shown under the field. Adding a
/// setting to a control = one `SettingDef` in its registry.
#[derive(Debug, Clone, Copy)]
pub struct SettingDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: SettingKind,
    /// Raw default, interpreted through `kind` when no value is stored.
    pub default: &'static str,
    pub help: Option<&'static str>,
}

/// The closed set of controls that carry line-oriented settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Select,
}

impl ControlKind {
    /// Stable name used by host applications. Once published, do not
    /// rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
        }
    }

    /// Display label for the control picker.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Select => "Select",
        }
    }

    /// Parse from a stored name. Unknown names return `None` (forward
    /// compat).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "select" => Some(Self::Select),
            _ => None,
        }
    }

    /// All variants for iteration.
    pub fn all() -> &'static [ControlKind] {
        &[Self::Select]
    }

    /// The control's settings in registration (= display) order.
    pub fn settings(&self) -> &'static [SettingDef] {
        match self {
            Self::Select => SELECT_SETTINGS,
        }
    }
}

const SELECT_SETTINGS: &[SettingDef] = &[
    SettingDef {
        name: "help",
        label: "Field instructions",
        kind: SettingKind::Textarea,
        default: "",
        help: None,
    },
    SettingDef {
        name: "required",
        label: "Required?",
        kind: SettingKind::Checkbox,
        default: "0",
        help: None,
    },
    SettingDef {
        name: "options",
        label: "Choices",
        kind: SettingKind::ChoiceList,
        default: "",
        help: Some(
            "Enter each choice on a new line. To specify the value and label separately, use this format: foo : Foo",
        ),
    },
    SettingDef {
        name: "default",
        label: "Default Value",
        kind: SettingKind::ValueList,
        default: "",
        help: Some("Enter each default value on a new line."),
    },
    SettingDef {
        name: "multiple",
        label: "Allow multiple choices?",
        kind: SettingKind::Checkbox,
        default: "",
        help: None,
    },
];

/// Current values for one control's settings.
///
/// Owns the control tag plus the values stored so far; values move in
/// through the submission and restore paths and out through the display
/// path. Settings with no stored value read as their registered default.
#[derive(Debug, Clone)]
pub struct ControlSettings {
    kind: ControlKind,
    values: HashMap<&'static str, SettingValue>,
}

impl ControlSettings {
    /// Create with no stored values.
    pub fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            values: HashMap::new(),
        }
    }

    pub fn control(&self) -> ControlKind {
        self.kind
    }

    /// Current value for a setting, falling back to the registered
    /// default interpreted through the setting's kind.
    pub fn get(&self, name: &str) -> Result<SettingValue, SettingError> {
        let def = self.lookup(name)?;
        Ok(self
            .values
            .get(def.name)
            .cloned()
            .unwrap_or_else(|| def.kind.parse_input(def.default)))
    }

    /// Submission path: parse raw editor input through the setting's
    /// kind and store the structured result.
    pub fn submit(&mut self, name: &str, raw: &str) -> Result<(), SettingError> {
        let def = self.lookup(name)?;
        let value = def.kind.parse_input(raw);
        tracing::debug!(
            control = self.kind.as_str(),
            setting = def.name,
            kind = def.kind.as_str(),
            "Parsed submitted setting"
        );
        self.values.insert(def.name, value);
        Ok(())
    }

    /// Restore path: classify a loosely-shaped stored value and keep it
    /// for display.
    pub fn restore(&mut self, name: &str, stored: &serde_json::Value) -> Result<(), SettingError> {
        let def = self.lookup(name)?;
        let value = SettingValue::from_stored(stored);
        tracing::trace!(
            control = self.kind.as_str(),
            setting = def.name,
            structured = value.is_structured(),
            "Restored stored setting"
        );
        self.values.insert(def.name, value);
        Ok(())
    }

    /// Display path: canonical editable text for a setting's value.
    pub fn display(&self, name: &str) -> Result<String, SettingError> {
        Ok(self.get(name)?.to_text())
    }

    fn lookup(&self, name: &str) -> Result<&'static SettingDef, SettingError> {
        self.kind
            .settings()
            .iter()
            .find(|def| def.name == name)
            .ok_or_else(|| SettingError::UnknownSetting {
                control: self.kind.as_str(),
                name: name.to_string(),
            })
    }
}
