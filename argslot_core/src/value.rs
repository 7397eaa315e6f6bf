use std::str::FromStr;
use thiserror::Error;

/// A conversion of a raw `Value` to some type `T` failed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {type_name}.")]
pub struct InvalidConversion {
    token: String,
    type_name: &'static str,
}

impl InvalidConversion {
    /// The raw token which failed to convert.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The name of the type the conversion targeted.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// A single raw token from the command line.
///
/// `Value` performs no interpretation of its own; conversions happen on demand and fail individually.
///
/// ### Example
/// ```
/// # use argslot_core as argslot;
/// use argslot::Value;
///
/// let value = Value::from("42");
/// assert!(value.is_int());
/// assert_eq!(value.as_int().unwrap(), 42);
/// assert!(!value.is_bool());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Value(String);

impl Value {
    /// Wrap a raw token.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the raw token.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Convert the raw token into any type `T` via [`FromStr`].
    pub fn parse<T: FromStr>(&self) -> Result<T, InvalidConversion> {
        T::from_str(&self.0).map_err(|_| InvalidConversion {
            token: self.0.clone(),
            type_name: std::any::type_name::<T>(),
        })
    }

    /// Convert to a 16-bit integer.
    pub fn as_short(&self) -> Result<i16, InvalidConversion> {
        self.parse()
    }

    /// Convert to a 32-bit integer.
    pub fn as_int(&self) -> Result<i32, InvalidConversion> {
        self.parse()
    }

    /// Convert to a 64-bit integer.
    pub fn as_long(&self) -> Result<i64, InvalidConversion> {
        self.parse()
    }

    /// Convert to a 32-bit float.
    pub fn as_float(&self) -> Result<f32, InvalidConversion> {
        self.parse()
    }

    /// Convert to a 64-bit float.
    pub fn as_double(&self) -> Result<f64, InvalidConversion> {
        self.parse()
    }

    /// Convert to a boolean; only the exact tokens `true` and `false` are accepted.
    pub fn as_bool(&self) -> Result<bool, InvalidConversion> {
        self.parse()
    }

    /// Convert to a character; the token must be precisely one character long.
    pub fn as_char(&self) -> Result<char, InvalidConversion> {
        self.parse()
    }

    /// Whether [`Value::as_short`] would succeed.
    pub fn is_short(&self) -> bool {
        self.as_short().is_ok()
    }

    /// Whether [`Value::as_int`] would succeed.
    pub fn is_int(&self) -> bool {
        self.as_int().is_ok()
    }

    /// Whether [`Value::as_long`] would succeed.
    pub fn is_long(&self) -> bool {
        self.as_long().is_ok()
    }

    /// Whether [`Value::as_float`] would succeed.
    pub fn is_float(&self) -> bool {
        self.as_float().is_ok()
    }

    /// Whether [`Value::as_double`] would succeed.
    pub fn is_double(&self) -> bool {
        self.as_double().is_ok()
    }

    /// Whether [`Value::as_bool`] would succeed.
    pub fn is_bool(&self) -> bool {
        self.as_bool().is_ok()
    }

    /// Whether [`Value::as_char`] would succeed.
    pub fn is_char(&self) -> bool {
        self.as_char().is_ok()
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for Value {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
