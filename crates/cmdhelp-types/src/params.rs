use crate::{Error, Result};
use std::fmt;

/// One positional argument slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    pub name: String,
    pub required: bool,
}

impl Arg {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
        }
    }

    /// Parse a single `<name>` or `[name]` token
    pub fn parse(token: &str) -> Result<Self> {
        let (inner, required) = if let Some(inner) = token
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
        {
            (inner, true)
        } else if let Some(inner) = token
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            (inner, false)
        } else {
            return Err(Error::InvalidParams(format!(
                "expected <name> or [name], got '{}'",
                token
            )));
        };

        if inner.is_empty() || inner.contains(['<', '>', '[', ']']) {
            return Err(Error::InvalidParams(format!(
                "bad argument name in '{}'",
                token
            )));
        }

        Ok(Self {
            name: inner.to_string(),
            required,
        })
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.required {
            write!(f, "<{}>", self.name)
        } else {
            write!(f, "[{}]", self.name)
        }
    }
}

/// Positional parameter schema of a command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    args: Vec<Arg>,
    min_count: usize,
    max_count: usize,
}

impl Params {
    /// A command that takes no positional arguments
    pub fn none() -> Self {
        Self::default()
    }

    /// Parse a space separated schema such as `<source> [target]`.
    ///
    /// Required slots must precede optional ones.
    pub fn parse(text: &str) -> Result<Self> {
        let mut args = Vec::new();
        let mut seen_optional = false;

        for token in text.split_whitespace() {
            let arg = Arg::parse(token)?;
            if arg.required && seen_optional {
                return Err(Error::InvalidParams(format!(
                    "required argument <{}> follows an optional one",
                    arg.name
                )));
            }
            seen_optional |= !arg.required;
            args.push(arg);
        }

        Ok(Self::from_args(args))
    }

    pub fn from_args(args: Vec<Arg>) -> Self {
        let min_count = args.iter().filter(|arg| arg.required).count();
        let max_count = args.len();
        Self {
            args,
            min_count,
            max_count,
        }
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn min_count(&self) -> usize {
        self.min_count
    }

    /// Number of positional arguments the command accepts
    pub fn max_count(&self) -> usize {
        self.max_count
    }
}
