use std::str::FromStr;
use thiserror::Error;

use crate::binder::Binder;
use crate::invocation::Invocation;
use crate::model::{ParameterSlot, RequiredFlagSlot};
use crate::params::BoundParameters;
use crate::tokens::Arguments;

mod compiler;

/// A usage string that cannot be compiled into a [`Schema`].
///
/// Offsets are byte offsets into the usage string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// The usage string ended inside a `<..` or `[..` parameter.
    #[error("Usage error: unterminated parameter '{name}' opened at offset {offset}.")]
    UnterminatedParameter {
        /// The partial parameter name.
        name: String,
        /// Where the parameter was opened.
        offset: usize,
    },

    /// The usage string ended inside an inline flag description, ex: `<-f desc`.
    #[error("Usage error: unterminated description for flag '-{flag}' opened at offset {offset}.")]
    UnterminatedFlag {
        /// The flag denotation.
        flag: char,
        /// Where the enclosing parameter was opened.
        offset: usize,
    },

    /// A parameter with no name, ex: `<>`.
    #[error("Usage error: empty parameter at offset {offset}.")]
    EmptyParameter {
        /// Where the parameter was opened.
        offset: usize,
    },
}

/// The compiled form of a usage string.
///
/// A usage string describes a command as follows:
/// * `<name>`: a required positional parameter.
/// * `[name]`: an optional positional parameter.
/// * `<-X description>`: a required value flag `-X` (the flag does not take a positional slot).
/// * `[-X description]`: a documented, but not required, value flag.
/// * Any tokens before the first parameter are the command followed by its fixed sub-commands.
///
/// A `Schema` is immutable; compile it once and bind it against as many [`Arguments`] as needed.
///
/// ### Example
/// ```
/// # use argslot_core as argslot;
/// use argslot::Schema;
///
/// let schema = Schema::compile("/command sub <a> <b> [c]").unwrap();
///
/// assert_eq!(schema.len(), 3);
/// assert_eq!(schema.amount_required(), 2);
/// assert_eq!(schema.amount_optional(), 1);
/// assert_eq!(schema.args_before_params(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    slots: Vec<ParameterSlot>,
    args_before_params: usize,
    amount_required: usize,
    required_flags: Vec<RequiredFlagSlot>,
}

impl Schema {
    pub(crate) fn new(
        slots: Vec<ParameterSlot>,
        args_before_params: usize,
        amount_required: usize,
        required_flags: Vec<RequiredFlagSlot>,
    ) -> Self {
        Self {
            slots,
            args_before_params,
            amount_required,
            required_flags,
        }
    }

    /// Compile a usage string.
    ///
    /// A usage string without any parameters compiles successfully (every token is then "before the parameters").
    /// Delimiters which do not close the current parameter are kept as part of its name.
    /// Unterminated or empty parameters are rejected with a [`UsageError`].
    pub fn compile(usage: &str) -> Result<Self, UsageError> {
        compiler::compile(usage)
    }

    /// The parameter slots, in the order they were declared.
    pub fn slots(&self) -> &[ParameterSlot] {
        &self.slots
    }

    /// Find the slot named `name`.
    pub fn slot(&self, name: &str) -> Option<&ParameterSlot> {
        self.slots.iter().find(|slot| slot.name() == name)
    }

    /// The number of parameter slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no parameter slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The number of required parameter slots (required flags are not counted).
    pub fn amount_required(&self) -> usize {
        self.amount_required
    }

    /// The number of optional parameter slots.
    pub fn amount_optional(&self) -> usize {
        self.len() - self.amount_required
    }

    /// The number of positional tokens which precede the first parameter.
    pub fn args_before_params(&self) -> usize {
        self.args_before_params
    }

    /// The required flags, in the order they were declared.
    pub fn required_flags(&self) -> &[RequiredFlagSlot] {
        &self.required_flags
    }

    /// Bind `arguments` against this schema.
    /// Shorthand for `Binder::new(self).bind(arguments)`.
    pub fn bind(&self, arguments: &Arguments) -> BoundParameters<'_> {
        Binder::new(self).bind(arguments)
    }

    /// Tokenize and bind `tokens` against this schema.
    /// Shorthand for `Binder::new(self).parse(tokens)`.
    pub fn parse<I, S>(&self, tokens: I) -> Invocation<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Binder::new(self).parse(tokens)
    }
}

impl FromStr for Schema {
    type Err = UsageError;

    fn from_str(usage: &str) -> Result<Self, Self::Err> {
        Self::compile(usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn names(schema: &Schema) -> Vec<(&str, bool)> {
        schema
            .slots()
            .iter()
            .map(|slot| (slot.name(), slot.is_required()))
            .collect()
    }

    #[test]
    fn compile_slot_order() {
        // Execute
        let schema = Schema::compile("/cmd sub <a> <b> [c]").unwrap();

        // Verify
        assert_eq!(names(&schema), vec![("a", true), ("b", true), ("c", false)]);
        assert_eq!(schema.args_before_params(), 1);
        assert_eq!(schema.amount_required(), 2);
        assert_eq!(schema.amount_optional(), 1);
        assert!(schema.required_flags().is_empty());
    }

    #[test]
    fn compile_inline_flag() {
        // Execute
        let schema = Schema::compile("/command subcommand <-f lol> <option1> [optional]").unwrap();

        // Verify
        assert_eq!(names(&schema), vec![("option1", true), ("optional", false)]);
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.amount_required(), 1);
        assert_eq!(schema.amount_optional(), 1);
        assert_eq!(schema.args_before_params(), 1);
        assert_eq!(
            schema.required_flags(),
            &[RequiredFlagSlot::new('f', "lol")]
        );
    }

    #[rstest]
    #[case("/c <-f desc>", vec!['f'])]
    #[case("/c [-f desc]", vec![])]
    #[case("/c <-f desc]", vec![])]
    #[case("/c [-f desc>", vec!['f'])]
    #[case("/c <-a x> [-b y] <-c z>", vec!['a', 'c'])]
    fn compile_flag_requiredness(#[case] usage: &str, #[case] expected: Vec<char>) {
        // Execute
        let schema = Schema::compile(usage).unwrap();

        // Verify
        assert_eq!(
            schema
                .required_flags()
                .iter()
                .map(RequiredFlagSlot::flag)
                .collect::<Vec<char>>(),
            expected
        );
        assert_eq!(schema.amount_required(), 0);
    }

    #[rstest]
    #[case("", 0)]
    #[case("/cmd", 0)]
    #[case("/cmd a b", 2)]
    #[case("/cmd <a>", 0)]
    #[case("<a>", 0)]
    #[case("/cmd sub <a>", 1)]
    #[case("/cmd sub<a>", 1)]
    #[case("/cmd  sub   <a>", 1)]
    #[case(" /cmd sub more <a>", 2)]
    #[case("/cmd <a> trailing words <b>", 0)]
    fn compile_args_before_params(#[case] usage: &str, #[case] expected: usize) {
        let schema = Schema::compile(usage).unwrap();

        assert_eq!(schema.args_before_params(), expected);
    }

    #[rstest]
    #[case("/cmd <a")]
    #[case("/cmd [a")]
    #[case("/cmd <")]
    #[case("/cmd <-f")]
    #[case("/cmd [a>")]
    #[case("/cmd <a]")]
    fn compile_unterminated_parameter(#[case] usage: &str) {
        assert_matches!(
            Schema::compile(usage),
            Err(UsageError::UnterminatedParameter { offset: 5, .. })
        );
    }

    #[rstest]
    #[case("/cmd <-f ")]
    #[case("/cmd <-f desc")]
    #[case("/cmd [-f desc")]
    fn compile_unterminated_flag(#[case] usage: &str) {
        assert_matches!(
            Schema::compile(usage),
            Err(UsageError::UnterminatedFlag {
                flag: 'f',
                offset: 5
            })
        );
    }

    #[test]
    fn compile_unterminated_flag_description() {
        assert_eq!(
            Schema::compile("/cmd <a> <-f the file"),
            Err(UsageError::UnterminatedFlag {
                flag: 'f',
                offset: 9
            })
        );
    }

    #[rstest]
    #[case("/cmd <>", 5)]
    #[case("/cmd <a> []", 9)]
    fn compile_empty_parameter(#[case] usage: &str, #[case] offset: usize) {
        assert_eq!(
            Schema::compile(usage),
            Err(UsageError::EmptyParameter { offset })
        );
    }

    #[test]
    fn compile_error_message() {
        // Execute
        let error = Schema::compile("/cmd <a").unwrap_err();

        // Verify
        let message = error.to_string();
        assert_contains!(message, "unterminated parameter 'a'");
        assert_contains!(message, "offset 5");
    }

    #[rstest]
    #[case("/cmd <file [opt]>", "file [opt]", true)]
    #[case("/cmd <a]>", "a]", true)]
    #[case("/cmd [a>]", "a>", false)]
    #[case("/cmd <a <b>", "a <b", true)]
    fn compile_delimiters_in_names(
        #[case] usage: &str,
        #[case] expected: &str,
        #[case] required: bool,
    ) {
        // Execute
        let schema = Schema::compile(usage).unwrap();

        // Verify
        assert_eq!(names(&schema), vec![(expected, required)]);
        assert_eq!(schema.amount_required(), usize::from(required));
    }

    #[test]
    fn compile_flag_inside_name() {
        // Execute
        let schema = Schema::compile("/cmd <file -f desc> <a>").unwrap();

        // Verify
        assert_eq!(names(&schema), vec![("a", true)]);
        assert_eq!(schema.amount_required(), 1);
        assert_eq!(
            schema.required_flags(),
            &[RequiredFlagSlot::new('f', "desc")]
        );
    }

    #[rstest]
    #[case("/cmd <a-b c>", 'b', "c")]
    #[case("/cmd [x -y z>", 'y', "z")]
    fn compile_flag_discards_name(
        #[case] usage: &str,
        #[case] flag: char,
        #[case] description: &str,
    ) {
        let schema = Schema::compile(usage).unwrap();

        assert!(schema.is_empty());
        assert_eq!(
            schema.required_flags(),
            &[RequiredFlagSlot::new(flag, description)]
        );
    }

    #[rstest]
    #[case("/cmd <a-bc d>", "a-bc d")]
    #[case("/cmd <two words>", "two words")]
    #[case("/cmd <-f>", "-f")]
    fn compile_names_resembling_flags(#[case] usage: &str, #[case] expected: &str) {
        let schema = Schema::compile(usage).unwrap();

        assert_eq!(names(&schema), vec![(expected, true)]);
        assert!(schema.required_flags().is_empty());
    }

    #[test]
    fn compile_from_str() {
        let schema: Schema = "/cmd <a>".parse().unwrap();

        assert_eq!(schema, Schema::compile("/cmd <a>").unwrap());
        assert_eq!(schema.slot("a"), Some(&ParameterSlot::new("a", true)));
        assert_eq!(schema.slot("b"), None);
    }

    // Builds a random usage string, returning it along with its expected (args_before_params, slots, required flags).
    fn random_usage(rng: &mut impl Rng) -> (String, usize, Vec<ParameterSlot>, Vec<char>) {
        let mut usage = String::from("/command");
        let leading = rng.gen_range(0..3);
        let mut slots = Vec::default();
        let mut flags = Vec::default();

        for i in 0..leading {
            usage.push_str(&format!(" sub{i}"));
        }

        for i in 0..rng.gen_range(0..8) {
            match rng.gen_range(0..4) {
                0 => {
                    usage.push_str(&format!(" <p{i}>"));
                    slots.push(ParameterSlot::new(format!("p{i}"), true));
                }
                1 => {
                    usage.push_str(&format!(" [p{i}]"));
                    slots.push(ParameterSlot::new(format!("p{i}"), false));
                }
                2 => {
                    let flag = rng.gen_range(b'a'..=b'z') as char;
                    usage.push_str(&format!(" <-{flag} flag number {i}>"));
                    flags.push(flag);
                }
                3 => usage.push_str(" [-x not required]"),
                _ => unreachable!("internal error - impossible gen_range()"),
            }
        }

        (usage, leading, slots, flags)
    }

    #[test]
    fn compile_random() {
        let mut rng = thread_rng();

        for _ in 0..100 {
            // Setup
            let (usage, leading, slots, flags) = random_usage(&mut rng);

            // Execute
            let schema = Schema::compile(&usage).unwrap();

            // Verify
            assert_eq!(schema.slots(), slots.as_slice(), "{usage}");
            assert_eq!(
                schema.amount_required(),
                slots.iter().filter(|slot| slot.is_required()).count(),
                "{usage}"
            );
            assert_eq!(
                schema
                    .required_flags()
                    .iter()
                    .map(RequiredFlagSlot::flag)
                    .collect::<Vec<char>>(),
                flags,
                "{usage}"
            );
            assert_eq!(schema.args_before_params(), leading, "{usage}");
            assert_eq!(Schema::compile(&usage).unwrap(), schema, "{usage}");
        }
    }
}
