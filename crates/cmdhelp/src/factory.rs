use crate::Result;
use cmdhelp_types::{Command, CommandConfig, Params};
use std::ffi::OsString;
use std::path::Path;

/// Name used when none is given and the program path is unusable
pub const FALLBACK_NAME: &str = "command";

/// Create a command from a name, a positional schema like `<src> [dst]`
/// and a config.
///
/// A missing or empty `name` is derived from the running program's path.
pub fn command(name: Option<&str>, params: &str, config: CommandConfig) -> Result<Command> {
    let name = match name.filter(|name| !name.is_empty()) {
        Some(name) => name.to_string(),
        None => program_name(),
    };
    let params = Params::parse(params)?;

    tracing::trace!(name = %name, args = params.max_count(), "creating command");
    Ok(Command::new(name, params).with_config(config))
}

/// File name of the invoked program, or [`FALLBACK_NAME`]
pub fn program_name() -> String {
    program_name_from(std::env::args_os().next())
}

fn program_name_from(arg0: Option<OsString>) -> String {
    arg0.as_deref()
        .map(|arg| Path::new(arg))
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_name_from_path() {
        assert_eq!(
            program_name_from(Some(OsString::from("/usr/local/bin/deployer"))),
            "deployer"
        );
        assert_eq!(program_name_from(Some(OsString::from("tool"))), "tool");
    }

    #[test]
    fn test_program_name_fallback() {
        assert_eq!(program_name_from(None), FALLBACK_NAME);
        assert_eq!(program_name_from(Some(OsString::new())), FALLBACK_NAME);
        assert_eq!(program_name_from(Some(OsString::from("/"))), FALLBACK_NAME);
    }

    #[test]
    fn test_command_uses_explicit_name() {
        let cmd = command(Some("deploy"), "<env>", CommandConfig::new()).unwrap();
        assert_eq!(cmd.name(), "deploy");
        assert_eq!(cmd.params().max_count(), 1);
    }

    #[test]
    fn test_command_derives_name_when_missing() {
        let cmd = command(None, "", CommandConfig::new()).unwrap();
        assert_eq!(cmd.name(), program_name());

        let cmd = command(Some(""), "", CommandConfig::new()).unwrap();
        assert_eq!(cmd.name(), program_name());
    }

    #[test]
    fn test_command_applies_config() {
        let config = CommandConfig::new().description("Ship it").version("0.3.0");
        let cmd = command(Some("ship"), "", config).unwrap();
        assert_eq!(cmd.meta().description.as_deref(), Some("Ship it"));
        assert_eq!(cmd.meta().version.as_deref(), Some("0.3.0"));
    }

    #[test]
    fn test_command_rejects_bad_params() {
        let err = command(Some("x"), "nope", CommandConfig::new()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid params"));
    }

    #[test]
    fn test_factory_errors_are_model_errors() {
        let err = command(Some("x"), "[a] <b>", CommandConfig::new()).unwrap_err();
        let crate::Error::Model(inner) = &err;
        assert!(matches!(inner, cmdhelp_types::Error::InvalidParams(_)));
        assert_eq!(err.to_string(), inner.to_string());
    }
}
