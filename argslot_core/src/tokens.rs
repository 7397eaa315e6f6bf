use std::env;

use crate::constant::*;
use crate::value::Value;

/// A single-dash flag along with the token that followed it, ex: `-f value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flag {
    name: String,
    value: Value,
}

impl Flag {
    /// Create a flag.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The flag name, without the leading `-`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The token following the flag.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The raw token following the flag.
    pub fn raw_value(&self) -> &str {
        self.value.as_str()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum TokenClass {
    Positional,
    // --NAME
    Switch(String),
    // -NAME VALUE
    ValueFlag(String),
}

fn classify(token: &str) -> TokenClass {
    if let Some(name) = token.strip_prefix(DOUBLE_FLAG_PREFIX) {
        // A bare "--" has no name.
        if name.is_empty() {
            TokenClass::Positional
        } else {
            TokenClass::Switch(name.to_string())
        }
    } else if let Some(name) = token.strip_prefix(SINGLE_FLAG_PREFIX) {
        // A bare "-" has no name.
        if name.is_empty() {
            TokenClass::Positional
        } else {
            TokenClass::ValueFlag(name.to_string())
        }
    } else {
        TokenClass::Positional
    }
}

fn matches_name(candidate: &str, name: &str) -> bool {
    candidate
        .chars()
        .flat_map(char::to_lowercase)
        .eq(name.chars().flat_map(char::to_lowercase))
}

/// The tokenized command line.
///
/// Tokens are split into three buckets:
/// * positionals: any token which is not a flag.
/// * value flags: `-NAME VALUE`, where `VALUE` is always the very next token.
/// * switches: `--NAME`, which never take a value.
///
/// A `-NAME` token with nothing after it, as well as the bare tokens `-` and `--`, are positionals.
/// Flag lookups are case-insensitive.
///
/// ### Example
/// ```
/// # use argslot_core as argslot;
/// use argslot::Arguments;
///
/// let arguments = Arguments::new(["subcommand", "-f", "value", "--verbose", "off"]);
///
/// assert_eq!(arguments.raw_positional(1), Some("off"));
/// assert_eq!(arguments.value_flag("F").unwrap().raw_value(), "value");
/// assert!(arguments.has_switch("verbose"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    all: Vec<Value>,
    positionals: Vec<Value>,
    flags: Vec<Flag>,
    switches: Vec<String>,
}

impl Arguments {
    /// Tokenize the input.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut all = Vec::default();
        let mut positionals = Vec::default();
        let mut flags = Vec::default();
        let mut switches = Vec::default();
        let mut tokens = tokens.into_iter().map(Into::into);

        while let Some(token) = tokens.next() {
            all.push(Value::from(token.as_str()));

            match classify(&token) {
                TokenClass::Positional => positionals.push(Value::from(token)),
                TokenClass::Switch(name) => switches.push(name),
                TokenClass::ValueFlag(name) => match tokens.next() {
                    Some(value) => {
                        all.push(Value::from(value.as_str()));
                        flags.push(Flag::new(name, value));
                    }
                    None => {
                        // Nothing left for the flag to take.
                        positionals.push(Value::from(token));
                    }
                },
            }
        }

        Self {
            all,
            positionals,
            flags,
            switches,
        }
    }

    /// Tokenize the Cli [`env::args`] (skipping the program name).
    pub fn from_env() -> Self {
        Self::new(env::args().skip(1))
    }

    /// Get the token at `index`, counting every token (flags and flag values included).
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.all.get(index)
    }

    /// Get the raw token at `index`, counting every token (flags and flag values included).
    pub fn raw(&self, index: usize) -> Option<&str> {
        self.get(index).map(Value::as_str)
    }

    /// Get the positional token at `index`.
    pub fn positional(&self, index: usize) -> Option<&Value> {
        self.positionals.get(index)
    }

    /// Get the raw positional token at `index`.
    pub fn raw_positional(&self, index: usize) -> Option<&str> {
        self.positional(index).map(Value::as_str)
    }

    /// All tokens, in order.
    pub fn all(&self) -> &[Value] {
        &self.all
    }

    /// The positional tokens, in order.
    pub fn positionals(&self) -> &[Value] {
        &self.positionals
    }

    /// The number of tokens (flags and flag values included).
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Whether there are no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// The number of positional tokens.
    pub fn positional_len(&self) -> usize {
        self.positionals.len()
    }

    /// Find the value flag `-name`.
    /// When repeated, the first occurrence wins.
    pub fn value_flag(&self, name: &str) -> Option<&Flag> {
        self.flags.iter().find(|flag| matches_name(flag.name(), name))
    }

    /// Whether the value flag `-name` is present.
    pub fn has_value_flag(&self, name: &str) -> bool {
        self.value_flag(name).is_some()
    }

    /// Whether the switch `--name` is present.
    pub fn has_switch(&self, name: &str) -> bool {
        self.switches
            .iter()
            .any(|switch| matches_name(switch, name))
    }

    /// The raw tokens, in order.
    pub fn to_vec(&self) -> Vec<String> {
        self.all.iter().map(ToString::to_string).collect()
    }
}
