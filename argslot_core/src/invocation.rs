use crate::params::{BoundParameters, ParameterValue};
use crate::tokens::Arguments;

/// Tokenized [`Arguments`] together with the parameters bound from them.
///
/// Built via [`Schema::parse`](crate::Schema::parse) or [`Binder::parse`](crate::Binder::parse).
/// Since the parameters are bound as part of construction, an `Invocation` can never be bound a second time.
///
/// ### Example
/// ```
/// # use argslot_core as argslot;
/// use argslot::Schema;
///
/// let schema = Schema::compile("/copy <source> [destination]").unwrap();
/// let invocation = schema.parse(["a.txt", "--force"]);
///
/// assert!(invocation.is_valid());
/// assert_eq!(invocation.raw_param("source"), Some("a.txt"));
/// assert!(!invocation.has_param("destination"));
/// assert!(invocation.arguments().has_switch("force"));
/// ```
#[derive(Debug, Clone)]
pub struct Invocation<'s> {
    arguments: Arguments,
    params: BoundParameters<'s>,
}

impl<'s> Invocation<'s> {
    pub(crate) fn new(arguments: Arguments, params: BoundParameters<'s>) -> Self {
        Self { arguments, params }
    }

    /// The tokenized arguments.
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// The bound parameters.
    pub fn params(&self) -> &BoundParameters<'s> {
        &self.params
    }

    /// Get the value bound to `name`.
    pub fn param(&self, name: &str) -> Option<&ParameterValue<'s>> {
        self.params.get(name)
    }

    /// Get the raw token bound to `name`.
    pub fn raw_param(&self, name: &str) -> Option<&str> {
        self.params.raw(name)
    }

    /// Whether a value is bound to `name`.
    pub fn has_param(&self, name: &str) -> bool {
        self.params.has(name)
    }

    /// Whether the bound parameters satisfy the schema.
    pub fn is_valid(&self) -> bool {
        self.params.is_valid()
    }

    /// Split into the tokenized arguments and bound parameters.
    pub fn into_parts(self) -> (Arguments, BoundParameters<'s>) {
        (self.arguments, self.params)
    }
}

#[cfg(test)]
mod tests {
    use crate::Schema;

    #[test]
    fn invocation() {
        // Setup
        let schema = Schema::compile("/command subcommand <-f lol> <option1> [optional]").unwrap();

        // Execute
        let invocation = schema.parse(vec!["subcommand", "-f", "value", "off", "on"]);

        // Verify
        assert_eq!(invocation.raw_param("option1"), Some("off"));
        assert_eq!(
            invocation.param("optional").unwrap().value().as_str(),
            "on"
        );
        assert!(invocation.has_param("optional"));
        assert!(invocation.is_valid());
        assert_eq!(invocation.params().len(), 2);
        assert_eq!(
            invocation.arguments().value_flag("f").unwrap().raw_value(),
            "value"
        );

        let (arguments, params) = invocation.into_parts();
        assert_eq!(arguments.positional_len(), 3);
        assert_eq!(params.raw("option1"), Some("off"));
    }

    #[test]
    fn invocation_invalid() {
        let schema = Schema::compile("/command subcommand <-f lol> <option1> [optional]").unwrap();

        let invocation = schema.parse(vec!["subcommand", "off", "on"]);

        assert_eq!(invocation.raw_param("option1"), Some("off"));
        assert_eq!(invocation.raw_param("optional"), Some("on"));
        assert!(!invocation.is_valid());
    }
}
