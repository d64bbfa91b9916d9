use crate::codec::lines::split_lines;
use crate::codec::SEPARATOR;

/// Parse submitted default-value text into an ordered value list.
///
/// One value per line. If a line contains ` : `, only the portion before
/// the separator is kept; the label portion is discarded. Blank lines
/// are dropped.
pub fn parse_values(text: &str) -> Vec<String> {
    let mut values = Vec::new();
    for line in split_lines(text) {
        if line.is_empty() {
            continue;
        }
        let mut segments = line.split(SEPARATOR);
        match (segments.next(), segments.next()) {
            (Some(value), Some(_)) => values.push(value.to_string()),
            _ => values.push(line.to_string()),
        }
    }
    values
}

/// Render a value list back into editable text, one value per line with
/// no leading or trailing blank lines.
pub fn format_values(values: &[String]) -> String {
    values.join("\n").trim().to_string()
}
