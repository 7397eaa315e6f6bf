use std::collections::{HashMap, HashSet};

use crate::model::ParameterSlot;
use crate::schema::Schema;
use crate::value::Value;

/// A token bound to a [`ParameterSlot`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterValue<'s> {
    value: Value,
    slot: &'s ParameterSlot,
}

impl<'s> ParameterValue<'s> {
    pub(crate) fn new(value: Value, slot: &'s ParameterSlot) -> Self {
        Self { value, slot }
    }

    /// The bound token.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The bound raw token.
    pub fn raw(&self) -> &str {
        self.value.as_str()
    }

    /// The slot this value is bound to.
    pub fn slot(&self) -> &'s ParameterSlot {
        self.slot
    }

    /// The name of the slot this value is bound to.
    pub fn name(&self) -> &'s str {
        self.slot.name()
    }

    /// Whether the slot this value is bound to is required.
    pub fn is_required(&self) -> bool {
        self.slot.is_required()
    }
}

/// The named parameters produced by binding [`Arguments`](crate::Arguments) against a [`Schema`].
///
/// Optional parameters without a matching token are absent; check with [`BoundParameters::has`].
/// The validity of the binding is decided once, when the `BoundParameters` is produced.
#[derive(Debug, Clone)]
pub struct BoundParameters<'s> {
    values: HashMap<String, ParameterValue<'s>>,
    schema: &'s Schema,
    valid: bool,
}

impl<'s> BoundParameters<'s> {
    pub(crate) fn new(
        values: HashMap<String, ParameterValue<'s>>,
        schema: &'s Schema,
        valid: bool,
    ) -> Self {
        Self {
            values,
            schema,
            valid,
        }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build a [`BoundParameters`] directly, for use in testing.
    ///
    /// Each `(name, value)` pair is bound to the slot `name` from `schema`; names without a slot are ignored.
    ///
    /// ### Example
    /// ```
    /// # use argslot_core as argslot;
    /// use argslot::{BoundParameters, Schema};
    ///
    /// // Function under test.
    /// fn greeting(params: &BoundParameters) -> String {
    ///     format!("hello {}", params.raw("name").unwrap_or("stranger"))
    /// }
    ///
    /// let schema = Schema::compile("/greet <name>").unwrap();
    /// let params = BoundParameters::test_dummy(&schema, [("name", "world")], true);
    /// assert_eq!(greeting(&params), "hello world");
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn test_dummy<'v>(
        schema: &'s Schema,
        values: impl IntoIterator<Item = (&'v str, &'v str)>,
        valid: bool,
    ) -> Self {
        let values = values
            .into_iter()
            .filter_map(|(name, value)| {
                schema.slot(name).map(|slot| {
                    (
                        name.to_string(),
                        ParameterValue::new(Value::from(value), slot),
                    )
                })
            })
            .collect();
        Self::new(values, schema, valid)
    }

    /// Get the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&ParameterValue<'s>> {
        self.values.get(name)
    }

    /// Get the raw token bound to `name`.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.get(name).map(ParameterValue::raw)
    }

    /// Whether a value is bound to `name`.
    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The names of all bound parameters.
    pub fn parameter_names(&self) -> HashSet<String> {
        self.values.keys().cloned().collect()
    }

    /// All bound values.
    pub fn values(&self) -> HashSet<ParameterValue<'s>> {
        self.values.values().cloned().collect()
    }

    /// All bound `(name, value)` pairs.
    pub fn entries(&self) -> HashMap<String, ParameterValue<'s>> {
        self.values.clone()
    }

    /// The number of bound parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no parameters are bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the binding satisfied the schema.
    ///
    /// Invalid when fewer parameters were bound than the schema requires, or when a required flag is missing.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The schema these parameters were bound against.
    pub fn schema(&self) -> &'s Schema {
        self.schema
    }
}
