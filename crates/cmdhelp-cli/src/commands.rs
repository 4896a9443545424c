use crate::args::Cli;
use crate::context::ExecutionContext;
use anyhow::{Result, bail};
use cmdhelp::{Command, render_help};
use std::io::Write;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::new(cli.file.as_deref(), cli.color.into(), cli.width);
    let help = render_for_path(&ctx, &cli.path)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(help.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Help text of the command reached by following `path` from the root
pub fn render_for_path(ctx: &ExecutionContext, path: &[String]) -> Result<String> {
    let root = ctx.root()?;
    let (target, ancestors) = resolve(root, path)?;
    tracing::info!(command = target.name(), depth = ancestors.len(), "rendering help");

    Ok(render_help(target, &ancestors, &ctx.help_options()))
}

/// Walk `path` and collect the names of every command above the target
fn resolve<'a>(root: &'a Command, path: &[String]) -> Result<(&'a Command, Vec<&'a str>)> {
    let mut current = root;
    let mut ancestors = Vec::with_capacity(path.len());

    for name in path {
        let Some(next) = current.get_command(name) else {
            let known: Vec<&str> = current.commands().keys().map(String::as_str).collect();
            if known.is_empty() {
                bail!("'{}' has no subcommands (asked for '{}')", current.name(), name);
            }
            bail!(
                "Unknown command '{}' under '{}'. Available: {}",
                name,
                current.name(),
                known.join(", ")
            );
        };
        ancestors.push(current.name());
        current = next;
    }

    Ok((current, ancestors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdhelp::Params;

    fn tree() -> Command {
        Command::new("app", Params::none())
            .command(
                Command::new("cloud", Params::none())
                    .command(Command::new("deploy", Params::none()))
                    .unwrap(),
            )
            .unwrap()
    }

    #[test]
    fn test_resolve_root() {
        let root = tree();
        let (target, ancestors) = resolve(&root, &[]).unwrap();
        assert_eq!(target.name(), "app");
        assert!(ancestors.is_empty());
    }

    #[test]
    fn test_resolve_nested() {
        let root = tree();
        let path = vec!["cloud".to_string(), "deploy".to_string()];
        let (target, ancestors) = resolve(&root, &path).unwrap();
        assert_eq!(target.name(), "deploy");
        assert_eq!(ancestors, vec!["app", "cloud"]);
    }

    #[test]
    fn test_resolve_unknown_lists_siblings() {
        let root = tree();
        let err = resolve(&root, &["nope".to_string()]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown command 'nope' under 'app'. Available: cloud"
        );
    }

    #[test]
    fn test_resolve_past_leaf() {
        let root = tree();
        let path = vec!["cloud".into(), "deploy".into(), "more".into()];
        let err = resolve(&root, &path).unwrap_err();
        assert!(err.to_string().contains("'deploy' has no subcommands"));
    }
}
