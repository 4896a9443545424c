use crate::theme::Theme;
use crate::width::{pad, visual_width};
use crate::wrap::break_by_lines;
use cmdhelp_types::Command;

/// Minimum column where descriptions start, counting the 4-space indent and
/// the 4-space gap minus their shared border.
pub const MIN_OFFSET: usize = 25;

const INDENT: &str = "    ";
const GAP: &str = "    ";

/// One row of a help table
#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    name: String,
    description: String,
}

/// Positional argument placeholders: `<name>` when required, `[name]` otherwise
pub fn args(command: &Command) -> String {
    command
        .params()
        .args()
        .iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The `Commands:` table, or an empty string when there are no subcommands
pub fn commands_help(command: &Command, theme: &Theme, width: usize) -> String {
    if !command.has_commands() {
        return String::new();
    }

    let lines: Vec<Line> = command
        .commands()
        .values()
        .map(|subcommand| {
            let placeholders = if subcommand.params().max_count() > 0 {
                format!(" {}", args(subcommand))
            } else {
                String::new()
            };

            Line {
                name: format!(
                    "{}{}",
                    theme.green(subcommand.name()),
                    theme.gray(&placeholders)
                ),
                description: subcommand.meta().description.clone().unwrap_or_default(),
            }
        })
        .collect();

    render_table("Commands:", &lines, width)
}

/// The `Options:` table, or an empty string when there are no options
pub fn options_help(command: &Command, theme: &Theme, width: usize) -> String {
    if !command.has_options() {
        return String::new();
    }

    let has_short_options = command.has_short_options();
    let lines: Vec<Line> = command
        .long_options()
        .map(|(_, option)| Line {
            name: decorate_usage(option.usage(), has_short_options, theme),
            description: option.description().to_string(),
        })
        .collect();

    render_table("Options:", &lines, width)
}

/// Align the usage text under the short-flag column and highlight flags.
///
/// When any option of the command has a short form, usages lacking one get
/// four spaces of filler so long flags line up.
pub fn decorate_usage(usage: &str, has_short_options: bool, theme: &Theme) -> String {
    if !starts_with_short_flag(usage) && has_short_options {
        highlight_flags(&format!("{}{}", INDENT, usage), theme)
    } else {
        highlight_flags(usage, theme)
    }
}

/// `-x, ` prefix: a dash, one character, comma, space
fn starts_with_short_flag(usage: &str) -> bool {
    let mut chars = usage.chars();
    chars.next() == Some('-')
        && chars.next().is_some_and(|c| c != '\n' && c != '\r')
        && chars.as_str().starts_with(", ")
}

// A flag is a dash at the start of the text or after whitespace, followed by
// at least one character that is neither whitespace nor a comma.
fn highlight_flags(text: &str, theme: &Theme) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();
    let mut at_boundary = true;

    while let Some((start, ch)) = chars.next() {
        if ch == '-' && at_boundary {
            let mut end = start + ch.len_utf8();
            while let Some(&(idx, next)) = chars.peek() {
                if next.is_whitespace() || next == ',' {
                    break;
                }
                end = idx + next.len_utf8();
                chars.next();
            }

            let token = &text[start..end];
            if end - start > 1 {
                out.push_str(&theme.yellow(token));
            } else {
                out.push_str(token);
            }
            at_boundary = false;
            continue;
        }

        out.push(ch);
        at_boundary = ch.is_whitespace();
    }

    out
}

fn render_table(header: &str, lines: &[Line], width: usize) -> String {
    let max_name_length = lines
        .iter()
        .map(|line| visual_width(&line.name))
        .fold(MIN_OFFSET - 2, usize::max);

    let mut out = vec![String::new(), header.to_string(), String::new()];
    out.extend(lines.iter().map(|line| {
        format!(
            "{}{}{}{}",
            INDENT,
            pad(max_name_length, &line.name),
            GAP,
            break_by_lines(&line.description, max_name_length + 8, width)
        )
    }));
    out.push(String::new());

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdhelp_types::Params;

    #[test]
    fn test_args_placeholders() {
        let cmd = Command::new("cp", Params::parse("<src> <dst> [mode]").unwrap());
        assert_eq!(args(&cmd), "<src> <dst> [mode]");
        assert_eq!(args(&Command::new("ls", Params::none())), "");
    }

    #[test]
    fn test_starts_with_short_flag() {
        assert!(starts_with_short_flag("-f, --force"));
        assert!(!starts_with_short_flag("--force"));
        assert!(!starts_with_short_flag("-f --force"));
        assert!(!starts_with_short_flag("-"));
    }

    #[test]
    fn test_decorate_usage_plain() {
        let theme = Theme::plain();
        assert_eq!(decorate_usage("-f, --force", true, &theme), "-f, --force");
        assert_eq!(decorate_usage("--dry-run", true, &theme), "    --dry-run");
        assert_eq!(decorate_usage("--dry-run", false, &theme), "--dry-run");
        assert_eq!(decorate_usage("-f,--force", true, &theme), "    -f,--force");
    }

    #[test]
    fn test_decorate_usage_highlights_flags_only() {
        let theme = Theme::colored();
        assert_eq!(
            decorate_usage("-o, --out <path>", true, &theme),
            "\u{1b}[33m-o\u{1b}[39m, \u{1b}[33m--out\u{1b}[39m <path>"
        );
        assert_eq!(
            decorate_usage("--no-color", true, &theme),
            "    \u{1b}[33m--no-color\u{1b}[39m"
        );
    }

    #[test]
    fn test_highlight_ignores_inner_and_lone_dashes() {
        let theme = Theme::colored();
        assert_eq!(highlight_flags("a-b - x", &theme), "a-b - x");
    }

    #[test]
    fn test_commands_help_empty_without_subcommands() {
        let cmd = Command::new("leaf", Params::none());
        assert_eq!(commands_help(&cmd, &Theme::plain(), 80), "");
        assert_eq!(options_help(&cmd, &Theme::plain(), 80), "");
    }

    #[test]
    fn test_commands_table_layout() {
        let cmd = Command::new("app", Params::none())
            .command(
                Command::new("run", Params::parse("<script>").unwrap())
                    .description("Run a script"),
            )
            .unwrap();

        let table = commands_help(&cmd, &Theme::plain(), 80);
        let expected = format!(
            "\nCommands:\n\n    {}    Run a script\n",
            pad(23, "run <script>")
        );
        assert_eq!(table, expected);
    }

    #[test]
    fn test_name_column_grows_with_widest_row() {
        let cmd = Command::new("app", Params::none())
            .option("--a-really-long-option-name <value>", "x")
            .unwrap()
            .option("--b", "y")
            .unwrap();

        let table = options_help(&cmd, &Theme::plain(), 200);
        let rows: Vec<&str> = table.lines().skip(3).take(2).collect();
        assert_eq!(rows[0], "    --a-really-long-option-name <value>    x");
        assert_eq!(rows[1], format!("    {}    y", pad(35, "--b")));
    }

    #[test]
    fn test_colored_rows_align_like_plain_rows() {
        let cmd = Command::new("app", Params::none())
            .option("-f, --force", "skip confirmation")
            .unwrap()
            .option("--quiet", "less output")
            .unwrap();

        let plain = options_help(&cmd, &Theme::plain(), 80);
        let colored = options_help(&cmd, &Theme::colored(), 80);
        let plain_widths: Vec<usize> = plain.lines().map(visual_width).collect();
        let colored_widths: Vec<usize> = colored.lines().map(visual_width).collect();
        assert_eq!(plain_widths, colored_widths);
    }
}
