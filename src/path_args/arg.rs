//! Positional argument values
//!
//! Arguments are dynamically typed so the validator can tell text, which
//! it treats as a path, from everything else, which it passes through.

use std::fmt;

/// A single positional argument of a wrapped call
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    None,
}

impl Arg {
    /// Returns the text value, if this argument is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Arg::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Arg::Text(_))
    }

    /// Consumes the argument, returning the text value if it is text
    pub fn into_text(self) -> Option<String> {
        match self {
            Arg::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Text(s) => write!(f, "{}", s),
            Arg::Int(i) => write!(f, "{}", i),
            Arg::Float(x) => write!(f, "{}", x),
            Arg::Bool(b) => write!(f, "{}", b),
            Arg::None => write!(f, "None"),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Int(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Arg::Int(value.into())
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::None, Into::into)
    }
}
