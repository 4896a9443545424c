use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::fmt;

/// When to colorize output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Color only when stdout is an interactive terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorChoice::Auto => write!(f, "auto"),
            ColorChoice::Always => write!(f, "always"),
            ColorChoice::Never => write!(f, "never"),
        }
    }
}

/// Color palette for help output.
///
/// Built once by the application and handed to the renderer. A disabled
/// theme returns every input untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    enabled: bool,
}

impl Theme {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn colored() -> Self {
        Self::new(true)
    }

    /// Enabled iff stdout is an interactive terminal
    pub fn detect() -> Self {
        Self::new(std::io::stdout().is_terminal())
    }

    pub fn from_choice(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::detect(),
            ColorChoice::Always => Self::colored(),
            ColorChoice::Never => Self::plain(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn green(&self, text: &str) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow().to_string())
    }

    pub fn gray(&self, text: &str) -> String {
        self.paint(text, |t| t.bright_black().to_string())
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan().to_string())
    }

    pub fn magenta(&self, text: &str) -> String {
        self.paint(text, |t| t.magenta().to_string())
    }

    // Empty input stays empty so no dangling escape pairs end up in the output
    fn paint(&self, text: &str, style: impl FnOnce(&str) -> String) -> String {
        if self.enabled && !text.is_empty() {
            style(text)
        } else {
            text.to_string()
        }
    }
}
