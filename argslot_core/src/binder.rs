use std::collections::HashMap;

use crate::invocation::Invocation;
use crate::model::{ParameterSlot, RequiredFlagSlot};
use crate::params::{BoundParameters, ParameterValue};
use crate::prelude::Processor;
use crate::schema::Schema;
use crate::tokens::Arguments;
use crate::value::Value;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Binds tokenized [`Arguments`] against a [`Schema`].
///
/// ### Example
/// ```
/// # use argslot_core as argslot;
/// use argslot::{Arguments, Binder, ParameterSlot, Schema};
///
/// let schema = Schema::compile("/command subcommand <-f lol> <option1> [optional]").unwrap();
/// let binder = Binder::new(&schema)
///     .processor(|_slot: &ParameterSlot, value: &str| Some(value.to_uppercase()));
///
/// let params = binder.bind(&Arguments::new(["subcommand", "-f", "value", "off", "on"]));
///
/// assert!(params.is_valid());
/// assert_eq!(params.raw("option1"), Some("OFF"));
/// assert_eq!(params.raw("optional"), Some("ON"));
/// ```
pub struct Binder<'s> {
    schema: &'s Schema,
    processors: Vec<Box<dyn Processor + 's>>,
}

impl<'s> std::fmt::Debug for Binder<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binder")
            .field("schema", &self.schema)
            .field("processors", &self.processors.len())
            .finish()
    }
}

impl<'s> Binder<'s> {
    /// Create a binder for `schema`, without any processors.
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            processors: Vec::default(),
        }
    }

    /// Register a processor to rewrite each raw token before it is bound.
    ///
    /// Processors apply in the order they are registered.
    /// Each sees the output of the previous; a `None` or empty output leaves the token as it was.
    pub fn processor(mut self, processor: impl Processor + 's) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    /// Bind `arguments` against the schema.
    ///
    /// Positional tokens, starting after the schema's `args_before_params`, are matched one-to-one with the slots.
    /// Each required flag is checked for exactly once.
    /// The result is invalid if fewer slots were bound than the schema requires, or if any required flag is absent.
    pub fn bind(&self, arguments: &Arguments) -> BoundParameters<'s> {
        let schema = self.schema;
        let tokens = arguments
            .positionals()
            .iter()
            .skip(schema.args_before_params());
        let mut required_flags = schema.required_flags().iter();
        let mut values = HashMap::default();
        let mut failed = false;

        for (slot, token) in schema.slots().iter().zip(tokens) {
            // Walk the flags alongside the slots; any remaining are checked afterwards.
            if let Some(required_flag) = required_flags.next() {
                failed |= !flag_present(arguments, required_flag);
            }

            let value = self.process(slot, token);
            values.insert(
                slot.name().to_string(),
                ParameterValue::new(value, slot),
            );
        }

        for required_flag in required_flags {
            failed |= !flag_present(arguments, required_flag);
        }

        let valid = !failed && values.len() >= schema.amount_required();

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Bound {} of {} slots ({} required), valid: {valid}.",
                values.len(),
                schema.len(),
                schema.amount_required()
            );
        }

        BoundParameters::new(values, schema, valid)
    }

    /// Tokenize and bind `tokens` against the schema.
    pub fn parse<I, S>(&self, tokens: I) -> Invocation<'s>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let arguments = Arguments::new(tokens);
        let params = self.bind(&arguments);
        Invocation::new(arguments, params)
    }

    fn process(&self, slot: &ParameterSlot, token: &Value) -> Value {
        let mut value = token.as_str().to_string();

        for processor in &self.processors {
            match processor.process(slot, &value) {
                Some(processed) if !processed.is_empty() => value = processed,
                _ => {}
            }
        }

        Value::from(value)
    }
}

fn flag_present(arguments: &Arguments, required_flag: &RequiredFlagSlot) -> bool {
    let present = arguments.has_value_flag(required_flag.flag().encode_utf8(&mut [0; 4]));

    #[cfg(feature = "tracing_debug")]
    {
        if !present {
            debug!("Required flag '-{}' is absent.", required_flag.flag());
        }
    }

    present
}
