//! Help text rendering for `cmdhelp` command trees.
//!
//! The renderer is a pure function of a [`Command`](cmdhelp_types::Command),
//! the ancestor path and [`HelpOptions`]. Terminal interrogation only happens
//! in [`HelpOptions::detect`] and [`Theme::detect`].

pub mod help;
pub mod sections;
pub mod theme;
pub mod width;
pub mod wrap;

pub use help::{DEFAULT_WIDTH, HelpOptions, HelpRenderer, render_help, terminal_width};
pub use sections::{MIN_OFFSET, commands_help, options_help};
pub use theme::{ColorChoice, Theme};
pub use width::{pad, visual_width};
pub use wrap::break_by_lines;
