//! Untyped input accepted by the validators.

/// A value of unknown runtime type handed to a validator.
///
/// Validators inspect the runtime type before any structural parsing, so
/// non-string inputs are rejected up front with a dedicated error.
///
/// # Examples
///
/// ```
/// use snap_id::Candidate;
///
/// assert_eq!(Candidate::from("npm:foo").as_str(), Some("npm:foo"));
/// assert_eq!(Candidate::from(true).as_str(), None);
/// assert_eq!(Candidate::Object.type_name(), "object");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Candidate<'a> {
    /// No value at all
    Undefined,
    /// An explicit null
    Null,
    /// A boolean
    Bool(bool),
    /// A number
    Number(f64),
    /// A string
    String(&'a str),
    /// An array of any contents
    Array,
    /// An object or map of any contents
    Object,
}

impl<'a> Candidate<'a> {
    /// Returns the string payload, or `None` for any other runtime type.
    #[must_use]
    pub const fn as_str(&self) -> Option<&'a str> {
        match *self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if this candidate is a string.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns the name of the runtime type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(s: &'a str) -> Self {
        Self::String(s)
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(s: &'a String) -> Self {
        Self::String(s.as_str())
    }
}

impl From<bool> for Candidate<'_> {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Candidate<'_> {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Candidate<'_> {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<i64> for Candidate<'_> {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<u64> for Candidate<'_> {
    fn from(n: u64) -> Self {
        Self::Number(n as f64)
    }
}

#[cfg(feature = "json")]
impl<'a> From<&'a serde_json::Value> for Candidate<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Self::String(s),
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}
