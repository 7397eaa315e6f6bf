//! `argslot` is a command line argument parser for Rust, driven by usage strings.
//!
//! Many programs already document their commands with a one line usage string, such as `/command sub <name> [count]`.
//! `argslot` takes that usage string as the *only* configuration of the command line parser.
//! Specifically, `argslot` attempts to prioritize the following design concerns:
//! * *Usage string as schema*:
//! The same text that is shown to the user describes the parameters to the parser.
//! There is no separate builder or attribute configuration to keep in sync.
//! * *Validity over errors*:
//! An incomplete command line is not an error; it is an invalid binding.
//! The caller branches on [`BoundParameters::is_valid`] rather than unwinding.
//! * *Deferred typing*:
//! Bound values are raw tokens.
//! Each conversion (ex: [`Value::as_int`]) happens at the call site, and fails individually.
//! * *Compile once*:
//! A [`Schema`] is immutable, so it may be compiled once and bound against any number of command lines.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/greeter.rs")]
//! ```
//!
//! ```console
//! $ greeter hello -s Hi Bob
//! Hi, Bob!
//!
//! $ greeter hello -s Hey Bob 2
//! Hey, Bob!
//! Hey, Bob!
//!
//! $ greeter hello Bob
//! usage: /greeter hello <-s salutation> <name> [times]
//!
//! $ greeter hello -s Hi Bob twice
//! Parse error: cannot convert 'twice' to i32.
//! ```
//!
//! # Usage Strings
//! Compile a usage string with [`Schema::compile`].
//! The syntax is as follows:
//! ```console
//! Token             | Meaning
//! ---------------------------------------------------------------------------------
//! <name>            | required positional parameter `name`
//! [name]            | optional positional parameter `name`
//! <-X description>  | required value flag `-X` (does not take a positional slot)
//! [-X description]  | documented value flag `-X`; not required
//! leading tokens    | the command, followed by its fixed sub-commands
//! ```
//!
//! The first token is the command itself.
//! Every other token before the first parameter is a fixed sub-command, and is skipped when binding.
//! For example, `/command sub <a> <b> [c]` compiles to three slots (two required) with one leading token to skip.
//!
//! ```
//! use argslot::Schema;
//!
//! let schema = Schema::compile("/command sub <a> <b> [c]").unwrap();
//!
//! let names: Vec<&str> = schema.slots().iter().map(|slot| slot.name()).collect();
//! assert_eq!(names, vec!["a", "b", "c"]);
//! assert_eq!(schema.amount_required(), 2);
//! assert_eq!(schema.args_before_params(), 1);
//! ```
//!
//! An inline flag is written `-X description` inside a parameter, and its description runs until the next `>` or `]`.
//! The flag replaces the parameter, so any name written before it is dropped.
//! The flag is required only when that delimiter is `>`.
//!
//! Inside a parameter, any delimiter other than the matching close is part of the name (`<a]>` is the slot `a]`).
//! Usage strings which end part way through a parameter, or which contain an empty parameter, are rejected with a [`UsageError`].
//!
//! # Tokens
//! [`Arguments`] splits the raw command line into three buckets:
//! * Positionals: any token that is not a flag.
//! * Value flags: `-NAME VALUE`, where `VALUE` is always the very next token.
//! * Switches: `--NAME`, which never take a value.
//!
//! A `-NAME` token with nothing after it, as well as the bare `-` and `--` tokens, are positionals.
//! Flag lookups are case-insensitive.
//!
//! # Binding
//! Binding walks the positional tokens (after skipping the schema's leading tokens) alongside the schema's slots.
//! Each slot takes precisely one token, in order; binding stops when either runs out.
//! The result is valid when:
//! * at least as many parameters were bound as the schema requires, and
//! * every required flag is present as a value flag.
//!
//! ```
//! use argslot::{Arguments, Schema};
//!
//! let schema = Schema::compile("/command subcommand <-f lol> <option1> [optional]").unwrap();
//!
//! let params = schema.bind(&Arguments::new(["subcommand", "-f", "value", "off", "on"]));
//! assert_eq!(params.raw("option1"), Some("off"));
//! assert_eq!(params.raw("optional"), Some("on"));
//! assert!(params.is_valid());
//!
//! // Missing the required '-f' flag.
//! let params = schema.bind(&Arguments::new(["subcommand", "off"]));
//! assert_eq!(params.raw("option1"), Some("off"));
//! assert!(!params.has("optional"));
//! assert!(!params.is_valid());
//! ```
//!
//! Use a [`Binder`] to rewrite tokens before they are bound (see [prelude::Processor]).
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while compiling and binding.
pub use argslot_core::*;
