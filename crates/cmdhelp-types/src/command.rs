use crate::{CommandOption, Error, Params, Result};
use std::collections::BTreeMap;

/// Descriptive metadata shown in help output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Meta {
    pub description: Option<String>,
    pub version: Option<String>,
}

/// Settings applied when a command is created through a factory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandConfig {
    pub description: Option<String>,
    pub version: Option<String>,
}

impl CommandConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// A command node: positional params, options and nested subcommands.
///
/// Subcommands and option spellings live in ordered maps so every
/// consumer iterates them by ascending key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    meta: Meta,
    params: Params,
    commands: BTreeMap<String, Command>,
    options: Vec<CommandOption>,
    short: BTreeMap<String, usize>,
    long: BTreeMap<String, usize>,
}

impl Command {
    pub fn new(name: impl Into<String>, params: Params) -> Self {
        Self {
            name: name.into(),
            meta: Meta::default(),
            params,
            commands: BTreeMap::new(),
            options: Vec::new(),
            short: BTreeMap::new(),
            long: BTreeMap::new(),
        }
    }

    pub fn with_config(mut self, config: CommandConfig) -> Self {
        if config.description.is_some() {
            self.meta.description = config.description;
        }
        if config.version.is_some() {
            self.meta.version = config.version;
        }
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.meta.description = Some(description.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.meta.version = Some(version.into());
        self
    }

    /// Declare an option from its usage text
    pub fn option(self, usage: &str, description: &str) -> Result<Self> {
        let option = CommandOption::parse(usage, description)?;
        self.with_option(option)
    }

    pub fn with_option(mut self, option: CommandOption) -> Result<Self> {
        if self.long.contains_key(option.long()) {
            return Err(Error::DuplicateOption(format!("--{}", option.long())));
        }
        if let Some(short) = option.short()
            && self.short.contains_key(short)
        {
            return Err(Error::DuplicateOption(format!("-{}", short)));
        }

        let index = self.options.len();
        if let Some(short) = option.short() {
            self.short.insert(short.to_string(), index);
        }
        self.long.insert(option.long().to_string(), index);
        self.options.push(option);
        Ok(self)
    }

    /// Attach a subcommand; names must be unique per parent
    pub fn command(mut self, command: Command) -> Result<Self> {
        if self.commands.contains_key(&command.name) {
            return Err(Error::DuplicateCommand(command.name));
        }
        self.commands.insert(command.name.clone(), command);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn commands(&self) -> &BTreeMap<String, Command> {
        &self.commands
    }

    pub fn get_command(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// Walk down the tree following `path`, one subcommand name per step
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<&Command> {
        path.iter()
            .try_fold(self, |command, name| command.get_command(name.as_ref()))
    }

    /// Options keyed by short spelling, ascending
    pub fn short_options(&self) -> impl Iterator<Item = (&str, &CommandOption)> {
        self.short
            .iter()
            .map(|(key, &index)| (key.as_str(), &self.options[index]))
    }

    /// Options keyed by long spelling, ascending
    pub fn long_options(&self) -> impl Iterator<Item = (&str, &CommandOption)> {
        self.long
            .iter()
            .map(|(key, &index)| (key.as_str(), &self.options[index]))
    }

    pub fn has_commands(&self) -> bool {
        !self.commands.is_empty()
    }

    pub fn has_options(&self) -> bool {
        !self.long.is_empty()
    }

    pub fn has_short_options(&self) -> bool {
        !self.short.is_empty()
    }
}
