//! cmdhelp: help text for command-line programs.
//!
//! # Overview
//!
//! `cmdhelp` renders the help screen of a command tree: a usage line, a
//! sorted table of subcommands and a sorted table of options. Columns are
//! aligned by visual width, so color sequences and wide characters never
//! break the layout, and descriptions are word-wrapped to the terminal width
//! with a hanging indent.
//!
//! # Quickstart
//!
//! ```
//! use cmdhelp::{Command, CommandConfig, HelpOptions, Params, Theme, command, render_help};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let deploy = command(Some("deploy"), "<env>", CommandConfig::new().description("Deploy the app"))?
//!     .option("-f, --force", "skip confirmation")?
//!     .command(Command::new("status", Params::none()))?;
//!
//! let options = HelpOptions::new(Theme::plain(), 80);
//! let help = render_help(&deploy, &["app"], &options);
//! assert!(help.contains("app deploy <env> [options] [command]"));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! This crate is a facade over:
//! - `cmdhelp-types`: the command model (`Command`, `CommandOption`, `Params`)
//! - `cmdhelp-render`: width measurement, wrapping, tables and the renderer
//!
//! Terminal settings are resolved by the caller, typically once at startup
//! with [`HelpOptions::detect`], and passed to every render call.

pub mod error;
pub mod factory;

pub use error::{Error, Result};
pub use factory::{FALLBACK_NAME, command, program_name};

pub use cmdhelp_types::{
    Arg, Command, CommandConfig, CommandOption, Meta, ParseArgvError, Params,
};

pub use cmdhelp_render::{
    ColorChoice, DEFAULT_WIDTH, HelpOptions, HelpRenderer, MIN_OFFSET, Theme, break_by_lines,
    pad, render_help, terminal_width, visual_width,
};

/// Model-level error, distinct from the facade [`Error`]
pub use cmdhelp_types::Error as ModelError;

/// Help for a top-level command using the current terminal's settings
pub fn help(command: &Command) -> String {
    help_for_path::<&str>(command, &[])
}

/// Help for a command nested under `ancestor_path`, using the current
/// terminal's settings
pub fn help_for_path<S: AsRef<str>>(command: &Command, ancestor_path: &[S]) -> String {
    render_help(command, ancestor_path, &HelpOptions::detect())
}
