use crate::types::ColorMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cmdhelp")]
#[command(about = "Print the help screen of a command tree defined in TOML", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command definition file (defaults to $CMDHELP_FILE, then ./cmdhelp.toml)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[arg(long, default_value = "auto")]
    pub color: ColorMode,

    /// Line width; detected from the terminal when omitted
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Debug output on stderr, repeat for more (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Subcommand names leading to the command to describe
    #[arg(value_name = "COMMAND")]
    pub path: Vec<String>,
}
