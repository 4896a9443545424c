pub mod command;
pub mod error;
pub mod option;
pub mod params;

pub use command::{Command, CommandConfig, Meta};
pub use error::{Error, ParseArgvError, Result};
pub use option::CommandOption;
pub use params::{Arg, Params};
