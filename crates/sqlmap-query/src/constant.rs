//! Constant values carried by constant expression nodes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a string or numeric constant node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstantValue {
    /// String constant
    String(String),
    /// Numeric constant (exact decimal)
    Number(Decimal),
}

impl ConstantValue {
    /// Get the string value, if this is a string constant
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Get the numeric value, if this is a numeric constant
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            Self::String(_) => None,
        }
    }
}

/// Renders as a SQL literal; single quotes inside strings are doubled
impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for ConstantValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ConstantValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Decimal> for ConstantValue {
    fn from(n: Decimal) -> Self {
        Self::Number(n)
    }
}
