// Usage string syntax.
pub(crate) const REQUIRED_OPEN: char = '<';
pub(crate) const REQUIRED_CLOSE: char = '>';
pub(crate) const OPTIONAL_OPEN: char = '[';
pub(crate) const OPTIONAL_CLOSE: char = ']';
pub(crate) const ARGUMENT_SEPARATOR: char = ' ';
pub(crate) const FLAG_PREFIX: char = '-';

// Command line token syntax.
pub(crate) const SINGLE_FLAG_PREFIX: &str = "-";
pub(crate) const DOUBLE_FLAG_PREFIX: &str = "--";
