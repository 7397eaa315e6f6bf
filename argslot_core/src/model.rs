/// A named positional parameter declared in a usage string, via `<name>` or `[name]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterSlot {
    name: String,
    required: bool,
}

impl ParameterSlot {
    pub(crate) fn new(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
        }
    }

    /// The name of the parameter (never empty).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the parameter was declared with `<..>`.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the parameter was declared with `[..]`.
    pub fn is_optional(&self) -> bool {
        !self.required
    }
}

impl std::fmt::Display for ParameterSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.required {
            write!(f, "<{}>", self.name)
        } else {
            write!(f, "[{}]", self.name)
        }
    }
}

/// A single character value flag declared inline in a usage string, via `<-X description>`.
///
/// Only flags whose description closes with `>` are required.
/// Flags closed by `]` are documentation only, and never become a `RequiredFlagSlot`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequiredFlagSlot {
    flag: char,
    description: String,
}

impl RequiredFlagSlot {
    pub(crate) fn new(flag: char, description: impl Into<String>) -> Self {
        Self {
            flag,
            description: description.into(),
        }
    }

    /// The flag denotation, ex: `f` for `-f`.
    pub fn flag(&self) -> char {
        self.flag
    }

    /// The human readable description which followed the flag denotation.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Display for RequiredFlagSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<-{} {}>", self.flag, self.description)
    }
}
