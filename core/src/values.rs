//! Typed values produced by coercion.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A coerced option value.
///
/// Every value supplied on the command line (and every declared default) is
/// represented as one of these variants after coercion. The variant is fully
/// determined by the option's declared [`ValueType`](crate::ValueType).
///
/// # Examples
///
/// ```
/// use optbind_core::OptionValue;
///
/// let v = OptionValue::Int(1234);
/// assert_eq!(v.as_int(), Some(1234));
/// assert_eq!(v.to_string(), "1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionValue {
    /// Plain string value.
    Str(String),
    /// Signed integer value.
    Int(i64),
    /// Boolean value (flag defaults).
    Bool(bool),
    /// File path, wrapped without any existence check.
    Path(PathBuf),
    /// Matched enumeration member name.
    Member(String),
}

impl OptionValue {
    /// Returns the string content for `Str` and `Member` variants.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) | Self::Member(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content, if any.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the boolean content, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the path content, if any.
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::Path(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) | Self::Member(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
