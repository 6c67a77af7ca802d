//! Runtime values and register indices.

use std::fmt;

use serde::Serialize;

/// A value produced by evaluating a literal, register or instruction.
///
/// Equality is structural. Values of different variants never compare equal,
/// so `Int(1) == Str("1")` is `false` rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Str(String),
}

impl Value {
    /// The empty string, produced by benign resolve failures and untaken `if` branches.
    pub fn empty() -> Self {
        Value::Str(String::new())
    }
}

/// Bare rendering: integers as decimal digits, strings without quotes.
///
/// This is the text used when a value becomes a DNS label.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// Register index. Registers are not declared; any index may be addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Register(pub u32);

impl Register {
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}
