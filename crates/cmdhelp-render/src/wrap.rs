use crate::width::pad;

/// Greedy word wrap with a hanging indent.
///
/// Lines hold fewer than `terminal_width - offset` characters, except for a
/// single word that is already wider, which keeps a line to itself. Words are
/// never split. Every line after the first is indented by `offset` columns.
///
/// Line length here is the raw UTF-16 length, control sequences included, so
/// a character outside the Basic Multilingual Plane counts as two.
pub fn break_by_lines(text: &str, offset: usize, terminal_width: usize) -> String {
    let max_width = terminal_width.saturating_sub(offset);
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split(' ') {
        let word_len = word.encode_utf16().count();

        if !line.is_empty() && line_len + word_len + 1 >= max_width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }

        if !line.is_empty() {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }

    lines.push(line);

    let indent = pad(offset, "");
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            if idx > 0 && offset > 0 {
                format!("{}{}", indent, line)
            } else {
                line.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
