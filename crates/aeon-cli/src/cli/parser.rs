//! Permissive argument parser.
//!
//! Rules:
//! - `--name value` sets a text flag when the next token does not start
//!   with `-`; otherwise `--name` is a switch.
//! - `-x` is always a switch.
//! - The first other token is the command; later ones are positionals.
//! - A repeated flag keeps its last value.
//!
//! Parsing never fails.

use std::collections::BTreeMap;

/// Value of a parsed flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Text(String),
    Switch,
}

impl FlagValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Switch => None,
        }
    }
}

/// Command, flags and positionals of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInvocation {
    command: String,
    flags: BTreeMap<String, FlagValue>,
    positionals: Vec<String>,
}

impl ParsedInvocation {
    /// Parse raw tokens (program name excluded).
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = tokens.into_iter().map(Into::into).peekable();
        let mut command: Option<String> = None;
        let mut flags = BTreeMap::new();
        let mut positionals = Vec::new();

        while let Some(token) = tokens.next() {
            if let Some(name) = token.strip_prefix("--") {
                let value = match tokens.next_if(|next| !next.starts_with('-')) {
                    Some(text) => FlagValue::Text(text),
                    None => FlagValue::Switch,
                };
                flags.insert(name.to_string(), value);
            } else if let Some(name) = token.strip_prefix('-') {
                flags.insert(name.to_string(), FlagValue::Switch);
            } else if command.is_none() {
                command = Some(token);
            } else {
                positionals.push(token);
            }
        }

        Self {
            command: command.unwrap_or_default(),
            flags,
            positionals,
        }
    }

    /// Command name, empty when none was given.
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn flags(&self) -> &BTreeMap<String, FlagValue> {
        &self.flags
    }

    pub fn flag(&self, name: &str) -> Option<&FlagValue> {
        self.flags.get(name)
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// Text value of a flag; `None` for switches and absent flags.
    pub fn flag_text(&self, name: &str) -> Option<&str> {
        self.flag(name).and_then(FlagValue::as_text)
    }

    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }
}
