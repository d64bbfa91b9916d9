use serde::{Deserialize, Serialize};

use crate::codec::lines::split_lines;
use crate::codec::SEPARATOR;

/// One selectable choice: the stored value and the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// A choice whose stored value doubles as its label.
    pub fn bare(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            label: text,
        }
    }
}

/// Parse submitted choice text into an ordered choice list.
///
/// One choice per line. A line containing ` : ` splits into value and
/// label; segments past the second are discarded. A line without the
/// separator becomes both value and label. Blank lines contribute
/// nothing, so the result is always densely indexed.
pub fn parse_choices(text: &str) -> Vec<Choice> {
    let mut choices = Vec::new();
    for line in split_lines(text) {
        if line.is_empty() {
            continue;
        }
        let mut segments = line.split(SEPARATOR);
        match (segments.next(), segments.next()) {
            (Some(value), Some(label)) => choices.push(Choice::new(value, label)),
            _ => choices.push(Choice::bare(line)),
        }
    }
    choices
}

/// Render a choice list back into canonical editable text.
///
/// A choice whose value equals its label collapses to the bare label;
/// otherwise the line is `value : label`. The result carries no leading
/// or trailing blank lines.
pub fn format_choices(choices: &[Choice]) -> String {
    let mut lines = Vec::with_capacity(choices.len());
    for choice in choices {
        if choice.value == choice.label {
            lines.push(choice.label.clone());
        } else {
            lines.push(format!("{}{}{}", choice.value, SEPARATOR, choice.label));
        }
    }
    lines.join("\n").trim().to_string()
}
