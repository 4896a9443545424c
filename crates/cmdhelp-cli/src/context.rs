use crate::definition::{CommandDefinition, resolve_definition_path};
use anyhow::Result;
use cmdhelp::{ColorChoice, Command, HelpOptions, Theme, terminal_width};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Process-level state for one invocation. The theme and the command tree
/// are built lazily, at most once.
pub struct ExecutionContext {
    definition_path: PathBuf,
    color: ColorChoice,
    width: Option<usize>,
    theme: OnceCell<Theme>,
    root: OnceCell<Command>,
}

impl ExecutionContext {
    pub fn new(definition_path: Option<&Path>, color: ColorChoice, width: Option<usize>) -> Self {
        Self {
            definition_path: resolve_definition_path(definition_path),
            color,
            width,
            theme: OnceCell::new(),
            root: OnceCell::new(),
        }
    }

    pub fn theme(&self) -> Theme {
        *self.theme.get_or_init(|| {
            let theme = Theme::from_choice(self.color);
            tracing::debug!(choice = %self.color, enabled = theme.is_enabled(), "color theme");
            theme
        })
    }

    pub fn width(&self) -> usize {
        self.width.unwrap_or_else(terminal_width)
    }

    pub fn help_options(&self) -> HelpOptions {
        HelpOptions::new(self.theme(), self.width())
    }

    pub fn root(&self) -> Result<&Command> {
        self.root.get_or_try_init(|| {
            tracing::debug!(path = %self.definition_path.display(), "loading definition");
            CommandDefinition::load_from(&self.definition_path)?.into_command()
        })
    }
}
