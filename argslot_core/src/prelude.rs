//! Traits which, typically, may be imported without concern: `use argslot::prelude::*`.

use crate::model::ParameterSlot;

/// Behaviour to rewrite a raw token before it is bound to a `ParameterSlot`.
///
/// Processors run in registration order (see [`Binder::processor`](crate::Binder::processor)).
/// Returning `None` (or an empty string) leaves the value unchanged for the next processor.
// Needs to be imported in order to implement a custom `Processor`.
pub trait Processor {
    /// Produce the replacement for `value`, if any.
    fn process(&self, slot: &ParameterSlot, value: &str) -> Option<String>;
}

impl<F> Processor for F
where
    F: Fn(&ParameterSlot, &str) -> Option<String>,
{
    fn process(&self, slot: &ParameterSlot, value: &str) -> Option<String> {
        self(slot, value)
    }
}
