use std::fmt;

/// Result type for command model construction
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a command tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Positional parameter definition could not be parsed
    InvalidParams(String),
    /// Option usage text could not be parsed
    InvalidOption(String),
    /// Short or long spelling already registered on the command
    DuplicateOption(String),
    /// Subcommand name already registered on the command
    DuplicateCommand(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParams(msg) => write!(f, "Invalid params: {}", msg),
            Error::InvalidOption(msg) => write!(f, "Invalid option: {}", msg),
            Error::DuplicateOption(name) => write!(f, "Duplicate option: {}", name),
            Error::DuplicateCommand(name) => write!(f, "Duplicate command: {}", name),
        }
    }
}

impl std::error::Error for Error {}

/// Error reported by argument parsing.
///
/// The help renderer never produces or inspects this type; it is part of the
/// model surface so embedding applications share one error vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseArgvError {
    pub message: String,
    pub argv: Vec<String>,
}

impl ParseArgvError {
    pub fn new(message: impl Into<String>, argv: Vec<String>) -> Self {
        Self {
            message: message.into(),
            argv,
        }
    }
}

impl fmt::Display for ParseArgvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseArgvError {}
