//! Line-oriented post-processing: tabular command padding, comma placement,
//! and alias column alignment. The main state machine stays oblivious to
//! column alignment; these sweeps run over the finished output.

use crate::formatter::TABULAR_MARKER;
use crate::options::{CommaPosition, IndentStyle};

/// Pad marker-wrapped reserved words to a fixed column and strip the markers.
/// `tabularLeft` right-pads; `tabularRight` left-pads.
pub fn align_tabular(output: &str, style: IndentStyle) -> String {
    let mut result = String::with_capacity(output.len());
    let mut rest = output;
    while let Some(start) = rest.find(TABULAR_MARKER) {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find(TABULAR_MARKER) {
            Some(end) => {
                result.push_str(&pad_command(&after[..end], style));
                rest = &after[end + 1..];
            }
            None => {
                result.push_str(after);
                return result;
            }
        }
    }
    result.push_str(rest);
    result
}

/// Pad to nine characters plus the separating space (column ten). Long
/// multi-word commands pad their first word only.
fn pad_command(content: &str, style: IndentStyle) -> String {
    if content.len() >= 10 && content.contains(' ') {
        if let Some((head, tail)) = content.split_once(' ') {
            return format!("{} {}", pad_word(head, style), tail);
        }
    }
    pad_word(content, style)
}

fn pad_word(word: &str, style: IndentStyle) -> String {
    match style {
        IndentStyle::TabularRight => format!("{:>9}", word),
        _ => format!("{:<9}", word),
    }
}

/// Rewrite comma placement over finished lines. `after` is the state
/// machine's native output and passes through untouched.
pub fn format_comma_positions(output: &str, position: CommaPosition) -> String {
    if position == CommaPosition::After {
        return output.to_string();
    }
    let lines: Vec<&str> = output.split('\n').collect();
    let mut result: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if !ends_with_comma(lines[i]) {
            result.push(lines[i].to_string());
            i += 1;
            continue;
        }

        let start = i;
        while i < lines.len() && ends_with_comma(lines[i]) {
            i += 1;
        }

        match position {
            CommaPosition::Before => {
                result.push(strip_comma(lines[start]).to_string());
                for line in &lines[start + 1..i] {
                    result.push(lead_with_comma(strip_comma(line)));
                }
                if i < lines.len() {
                    result.push(lead_with_comma(lines[i]));
                    i += 1;
                }
            }
            CommaPosition::Tabular => {
                let mut width = lines[start..i]
                    .iter()
                    .map(|line| strip_comma(line).len())
                    .max()
                    .unwrap_or(0);
                // The closing item has no comma but still sets the column.
                if i < lines.len() {
                    width = width.max(lines[i].trim_end().len());
                }
                for line in &lines[start..i] {
                    result.push(format!("{:<width$},", strip_comma(line)));
                }
            }
            CommaPosition::After => unreachable!(),
        }
    }

    result.join("\n")
}

fn ends_with_comma(line: &str) -> bool {
    line.trim_end().ends_with(',')
}

fn strip_comma(line: &str) -> &str {
    line.trim_end().trim_end_matches(',').trim_end()
}

/// Move the comma to the head of the line, eating into the indent so the
/// content column is preserved where possible.
fn lead_with_comma(line: &str) -> String {
    let indent_len = line.len() - line.trim_start().len();
    let content = &line[indent_len..];
    if indent_len >= 2 {
        format!("{}, {}", &line[..indent_len - 2], content)
    } else {
        format!(", {}", content)
    }
}

/// Align the `AS` column across runs of consecutive aliased lines.
pub fn format_alias_positions(output: &str) -> String {
    let lines: Vec<&str> = output.split('\n').collect();
    let mut result: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if split_alias(lines[i]).is_none() {
            result.push(lines[i].to_string());
            i += 1;
            continue;
        }

        let start = i;
        while i < lines.len() && split_alias(lines[i]).is_some() {
            i += 1;
        }
        let group: Vec<(&str, &str)> = lines[start..i]
            .iter()
            .map(|line| split_alias(line).unwrap_or((line, "")))
            .collect();
        let width = group.iter().map(|(expr, _)| expr.len()).max().unwrap_or(0);
        for (expr, alias) in group {
            result.push(format!("{:<width$} {}", expr, alias));
        }
    }

    result.join("\n")
}

/// Split a line at its last ` AS ` into (expression, alias clause).
fn split_alias(line: &str) -> Option<(&str, &str)> {
    let upper = line.to_uppercase();
    let idx = upper.rfind(" AS ")?;
    Some((line[..idx].trim_end(), &line[idx + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_tabular_left() {
        let output = "\u{1}SELECT\u{1} a\n\u{1}WHERE\u{1} x";
        assert_eq!(
            align_tabular(output, IndentStyle::TabularLeft),
            "SELECT    a\nWHERE     x"
        );
    }

    #[test]
    fn test_align_tabular_right() {
        let output = "\u{1}SELECT\u{1} a\n\u{1}AND\u{1} x";
        assert_eq!(
            align_tabular(output, IndentStyle::TabularRight),
            "   SELECT a\n      AND x"
        );
    }

    #[test]
    fn test_align_tabular_multi_word() {
        let output = "\u{1}GROUP BY\u{1} a";
        assert_eq!(
            align_tabular(output, IndentStyle::TabularLeft),
            "GROUP BY  a"
        );
    }

    #[test]
    fn test_comma_position_before() {
        let input = "SELECT\n  aaa,\n  bbb,\n  ccc\nFROM\n  t";
        assert_eq!(
            format_comma_positions(input, CommaPosition::Before),
            "SELECT\n  aaa\n, bbb\n, ccc\nFROM\n  t"
        );
    }

    #[test]
    fn test_comma_position_tabular() {
        let input = "SELECT\n  a,\n  bbbb,\n  cc\nFROM\n  t";
        assert_eq!(
            format_comma_positions(input, CommaPosition::Tabular),
            "SELECT\n  a   ,\n  bbbb,\n  cc\nFROM\n  t"
        );
    }

    #[test]
    fn test_comma_position_after_is_identity() {
        let input = "SELECT\n  a,\n  b";
        assert_eq!(format_comma_positions(input, CommaPosition::After), input);
    }

    #[test]
    fn test_alias_alignment() {
        let input = "SELECT\n  one AS a,\n  twotwo AS b\nFROM\n  t";
        assert_eq!(
            format_alias_positions(input),
            "SELECT\n  one    AS a,\n  twotwo AS b\nFROM\n  t"
        );
    }

    #[test]
    fn test_alias_alignment_leaves_plain_lines() {
        let input = "SELECT\n  a,\n  b";
        assert_eq!(format_alias_positions(input), input);
    }
}
