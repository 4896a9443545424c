use crate::{Arg, Error, Result};

/// A command-line option as declared by its usage text, e.g. `-f, --file <path>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOption {
    usage: String,
    description: String,
    short: Option<String>,
    long: String,
    value: Option<Arg>,
}

impl CommandOption {
    /// Parse usage text of the forms `-x, --name`, `--name <value>`,
    /// `-x, --name [value]`. Spaces around the comma are optional.
    ///
    /// Every option needs a long spelling; the short one is optional.
    pub fn parse(usage: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let usage = usage.into();
        let mut short = None;
        let mut long = None;
        let mut value = None;

        let tokens = usage
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty());

        for token in tokens {
            if let Some(name) = token.strip_prefix("--") {
                if name.is_empty() || long.is_some() {
                    return Err(Error::InvalidOption(usage.clone()));
                }
                long = Some(name.to_string());
            } else if let Some(name) = token.strip_prefix('-') {
                if name.chars().count() != 1 || short.is_some() || long.is_some() {
                    return Err(Error::InvalidOption(usage.clone()));
                }
                short = Some(name.to_string());
            } else if value.is_none() && long.is_some() {
                value = Some(Arg::parse(token).map_err(|_| Error::InvalidOption(usage.clone()))?);
            } else {
                return Err(Error::InvalidOption(usage.clone()));
            }
        }

        let Some(long) = long else {
            return Err(Error::InvalidOption(format!(
                "{} (missing --long form)",
                usage
            )));
        };

        Ok(Self {
            usage,
            description: description.into(),
            short,
            long,
            value,
        })
    }

    /// Literal usage text, printed as-is in the options table
    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Short spelling without the dash
    pub fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }

    /// Long spelling without the leading dashes
    pub fn long(&self) -> &str {
        &self.long
    }

    pub fn value(&self) -> Option<&Arg> {
        self.value.as_ref()
    }
}
