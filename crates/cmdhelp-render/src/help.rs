use crate::sections::{args, commands_help, options_help};
use crate::theme::Theme;
use cmdhelp_types::Command;
use is_terminal::IsTerminal;
use terminal_size::{Width, terminal_size};

/// Line width used when stdout is not a terminal or reports no width
pub const DEFAULT_WIDTH: usize = 200;

/// Everything the renderer needs from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpOptions {
    pub theme: Theme,
    pub width: usize,
}

impl Default for HelpOptions {
    fn default() -> Self {
        Self {
            theme: Theme::plain(),
            width: DEFAULT_WIDTH,
        }
    }
}

impl HelpOptions {
    pub fn new(theme: Theme, width: usize) -> Self {
        Self { theme, width }
    }

    /// Probe stdout once for interactivity and column count
    pub fn detect() -> Self {
        let options = Self::new(Theme::detect(), terminal_width());
        tracing::debug!(
            width = options.width,
            color = options.theme.is_enabled(),
            "detected terminal settings"
        );
        options
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// Column count reported by stdout, or [`DEFAULT_WIDTH`]
pub fn terminal_width() -> usize {
    if !std::io::stdout().is_terminal() {
        return DEFAULT_WIDTH;
    }

    match terminal_size() {
        Some((Width(w), _)) if w > 0 => w as usize,
        _ => DEFAULT_WIDTH,
    }
}

/// Renders help for any number of commands with fixed settings
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpRenderer {
    options: HelpOptions,
}

impl HelpRenderer {
    pub fn new(options: HelpOptions) -> Self {
        Self { options }
    }

    pub fn render<S: AsRef<str>>(&self, command: &Command, ancestor_path: &[S]) -> String {
        render_help(command, ancestor_path, &self.options)
    }
}

/// Full help text for `command`.
///
/// `ancestor_path` lists the names of the enclosing commands, outermost
/// first; pass an empty slice for a top-level command.
pub fn render_help<S: AsRef<str>>(
    command: &Command,
    ancestor_path: &[S],
    options: &HelpOptions,
) -> String {
    let theme = &options.theme;
    let command_path = display_path(command, ancestor_path);
    tracing::debug!(
        command = %command_path,
        width = options.width,
        "rendering help"
    );

    let mut usage = String::new();
    if let Some(description) = &command.meta().description {
        usage.push_str(description);
        usage.push_str("\n\n");
    }

    usage.push_str("Usage:\n\n    ");
    usage.push_str(&theme.cyan(&command_path));
    if command.params().max_count() > 0 {
        usage.push(' ');
        usage.push_str(&theme.magenta(&args(command)));
    }
    if command.has_options() {
        usage.push_str(&format!(" [{}]", theme.yellow("options")));
    }
    if command.has_commands() {
        usage.push_str(&format!(" [{}]", theme.green("command")));
    }

    let tables = format!(
        "{}{}",
        commands_help(command, theme, options.width),
        options_help(command, theme, options.width)
    );

    format!("{}\n{}", usage, tables)
}

fn display_path<S: AsRef<str>>(command: &Command, ancestor_path: &[S]) -> String {
    if ancestor_path.is_empty() {
        return command.name().to_string();
    }

    ancestor_path
        .iter()
        .map(|name| name.as_ref())
        .chain(std::iter::once(command.name()))
        .collect::<Vec<_>>()
        .join(" ")
}
