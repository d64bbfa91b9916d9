use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{format_choices, format_values, parse_choices, parse_values, Choice};

/// How a setting's submitted text is interpreted.
///
/// Adding a new kind: add a variant here + arms in `as_str`/`parse`/
/// `parse_input`. The `as_str` value identifies the editor widget to host
/// applications — once published, do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Free-form text, stored as typed.
    Textarea,
    /// Boolean stored as "1" or "0".
    Checkbox,
    /// One `value : label` choice per line.
    ChoiceList,
    /// One bare default value per line.
    ValueList,
}

impl SettingKind {
    /// Stable name for the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
            Self::ChoiceList => "choice_list",
            Self::ValueList => "value_list",
        }
    }

    /// Parse from a stored name. Unknown names return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "textarea" => Some(Self::Textarea),
            "checkbox" => Some(Self::Checkbox),
            "choice_list" => Some(Self::ChoiceList),
            "value_list" => Some(Self::ValueList),
            _ => None,
        }
    }

    /// All variants for iteration.
    pub fn all() -> &'static [SettingKind] {
        &[
            Self::Textarea,
            Self::Checkbox,
            Self::ChoiceList,
            Self::ValueList,
        ]
    }

    /// Submission path: interpret raw editor input as a stored value.
    pub fn parse_input(&self, raw: &str) -> SettingValue {
        match self {
            Self::Textarea => SettingValue::Text(raw.to_string()),
            Self::Checkbox => SettingValue::Text(sanitize_checkbox(raw)),
            Self::ChoiceList => SettingValue::Choices(parse_choices(raw)),
            Self::ValueList => SettingValue::Values(parse_values(raw)),
        }
    }
}

/// A setting's current value: raw text, or one of the two structured
/// list shapes.
///
/// The shapes are distinguished at the type level, so the display path
/// dispatches without probing. Serialization stays shape-discriminated
/// (a bare string, an array of strings, or an array of `{value, label}`
/// maps) to match what host applications store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Values(Vec<String>),
    Choices(Vec<Choice>),
    Text(String),
}

impl SettingValue {
    /// Display path: canonical editable text for this value.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Choices(choices) => format_choices(choices),
            Self::Values(values) => format_values(values),
        }
    }

    /// Classify a loosely-shaped stored value.
    ///
    /// Host applications hand back whatever they persisted. A string is
    /// raw text; an array of strings is a value list; any other array is
    /// a choice list, keeping only entries that carry both a string
    /// `value` and a string `label`. Everything else degrades to text.
    pub fn from_stored(stored: &Value) -> Self {
        match stored {
            Value::String(text) => Self::Text(text.clone()),
            Value::Array(items) if items.iter().all(Value::is_string) => Self::Values(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            ),
            Value::Array(items) => Self::Choices(items.iter().filter_map(choice_entry).collect()),
            Value::Null | Value::Object(_) => Self::Text(String::new()),
            other => Self::Text(other.to_string()),
        }
    }

    /// Whether this value has already been structured by a parser.
    pub fn is_structured(&self) -> bool {
        !matches!(self, Self::Text(_))
    }
}

/// Extract a complete choice from one stored array entry. Entries
/// missing either field are dropped.
fn choice_entry(item: &Value) -> Option<Choice> {
    let value = item.get("value")?.as_str()?;
    let label = item.get("label")?.as_str()?;
    Some(Choice::new(value, label))
}

/// Checkbox submissions store "1" only for an exact "1", else "0".
fn sanitize_checkbox(raw: &str) -> String {
    if raw == "1" {
        "1".to_string()
    } else {
        "0".to_string()
    }
}
