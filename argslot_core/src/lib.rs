//! Core module for `argslot`.
//! See [documentation root](https://docs.rs/argslot/latest/argslot/index.html) for full details.
#![deny(missing_docs)]
mod binder;
mod constant;
mod invocation;
mod model;
mod params;
pub mod prelude;
mod schema;
mod tokens;
mod value;

pub use binder::Binder;
pub use invocation::Invocation;
pub use model::*;
pub use params::{BoundParameters, ParameterValue};
pub use schema::{Schema, UsageError};
pub use tokens::{Arguments, Flag};
pub use value::{InvalidConversion, Value};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
