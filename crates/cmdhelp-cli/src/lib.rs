mod args;
mod commands;
pub mod context;
pub mod definition;
pub mod logging;
pub mod types;

pub use args::Cli;
pub use commands::run;
