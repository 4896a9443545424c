use anyhow::{Context, Result};
use cmdhelp::{Command, CommandConfig, command};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_NAME: &str = "cmdhelp.toml";

/// Resolve the definition file based on priority:
/// 1. Explicit path
/// 2. CMDHELP_FILE environment variable
/// 3. cmdhelp.toml in the working directory
pub fn resolve_definition_path(explicit_path: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit_path {
        return path.to_path_buf();
    }

    if let Ok(env_path) = std::env::var("CMDHELP_FILE")
        && !env_path.is_empty()
    {
        return PathBuf::from(env_path);
    }

    PathBuf::from(DEFAULT_FILE_NAME)
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OptionDefinition {
    pub usage: String,
    #[serde(default)]
    pub description: String,
}

/// One node of a command tree as written in TOML.
///
/// ```toml
/// name = "app"
/// description = "Example application"
/// args = "<input> [output]"
///
/// [[options]]
/// usage = "-v, --verbose"
/// description = "Talk more"
///
/// [commands.build]
/// description = "Compile everything"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CommandDefinition {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub args: String,
    #[serde(default)]
    pub options: Vec<OptionDefinition>,
    #[serde(default)]
    pub commands: BTreeMap<String, CommandDefinition>,
}

impl CommandDefinition {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid definition in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let definition: CommandDefinition = toml::from_str(content)?;
        Ok(definition)
    }

    /// Build the command tree. The root falls back to the program name when
    /// the file does not name it; subcommands take their table key.
    pub fn into_command(self) -> Result<Command> {
        let name = self.name.clone();
        self.build(name.as_deref())
    }

    fn build(self, name: Option<&str>) -> Result<Command> {
        let config = CommandConfig {
            description: self.description,
            version: self.version,
        };
        let mut cmd = command(name, &self.args, config)
            .with_context(|| format!("Command '{}'", cmd_label(name)))?;

        for option in self.options {
            cmd = cmd
                .option(&option.usage, &option.description)
                .with_context(|| format!("Command '{}'", cmd_label(name)))?;
        }

        for (key, child) in self.commands {
            let sub = child.build(Some(key.as_str()))?;
            cmd = cmd
                .command(sub)
                .with_context(|| format!("Command '{}'", cmd_label(name)))?;
        }

        Ok(cmd)
    }
}

fn cmd_label(name: Option<&str>) -> &str {
    name.unwrap_or("<root>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
name = "app"
description = "Example application"

[[options]]
usage = "-v, --verbose"
description = "Talk more"

[commands.deploy]
description = "Deploy the app"
args = "<env>"

[[commands.deploy.options]]
usage = "-f, --force"
description = "skip confirmation"

[commands.deploy.commands.status]
"#;

    #[test]
    fn test_parse_and_build_tree() {
        let cmd = CommandDefinition::parse(SAMPLE).unwrap().into_command().unwrap();

        assert_eq!(cmd.name(), "app");
        assert_eq!(cmd.meta().description.as_deref(), Some("Example application"));
        assert!(cmd.has_options());

        let deploy = cmd.find(&["deploy"]).unwrap();
        assert_eq!(deploy.params().max_count(), 1);
        assert!(deploy.has_short_options());
        assert!(deploy.find(&["status"]).is_some());
    }

    #[test]
    fn test_missing_root_name_uses_program_name() {
        let cmd = CommandDefinition::parse("description = \"x\"")
            .unwrap()
            .into_command()
            .unwrap();
        assert_eq!(cmd.name(), cmdhelp::program_name());
    }

    #[test]
    fn test_invalid_option_reports_command() {
        let err = CommandDefinition::parse("name = \"app\"\n[[options]]\nusage = \"nope\"\n")
            .unwrap()
            .into_command()
            .unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Command 'app'"), "{}", message);
        assert!(message.contains("Invalid option"), "{}", message);
    }

    #[test]
    fn test_unknown_field_is_ignored_but_bad_type_fails() {
        assert!(CommandDefinition::parse("name = \"a\"\nextra = 1").is_ok());
        assert!(CommandDefinition::parse("name = 5").is_err());
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("cli.toml");
        std::fs::write(&path, SAMPLE)?;

        let definition = CommandDefinition::load_from(&path)?;
        assert_eq!(definition.name.as_deref(), Some("app"));
        assert_eq!(definition.commands.len(), 1);
        Ok(())
    }

    #[test]
    fn test_load_missing_file_mentions_path() {
        let err = CommandDefinition::load_from(Path::new("/definitely/missing.toml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/missing.toml"));
    }

    #[test]
    fn test_resolve_explicit_path_wins() {
        let path = resolve_definition_path(Some(Path::new("explicit.toml")));
        assert_eq!(path, PathBuf::from("explicit.toml"));
    }
}
