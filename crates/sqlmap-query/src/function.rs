//! Function tags for field expressions

use serde::{Deserialize, Serialize};
use std::fmt;

/// The operation a [`FieldExpression`](crate::FieldExpression) node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldFunction {
    // === References and constants ===
    /// Plain column reference
    Field,
    /// String constant
    StringConstant,
    /// Numeric constant
    NumberConstant,
    /// SQL NULL
    NullConstant,

    // === Aggregates ===
    /// Sum of a column or expression
    Sum,
    /// Count of all rows
    Count,
    /// Smallest value
    Minimum,
    /// Largest value
    Maximum,

    // === Scalar functions ===
    /// First non-null operand, left to right
    Coalesce,
    /// Month component of a date
    Month,
    /// Year component of a date
    Year,
    /// Product of two operands
    Multiply,
    /// Quotient of two operands (first operand is the dividend)
    Divide,
    /// String concatenation of all operands
    Concat,
}

/// Number of operands a function takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Leaf node: references, constants, `COUNT(*)`
    None,
    /// One operand, either a field path or a nested expression
    Unary,
    /// Exactly two nested expressions
    Binary,
    /// Any number of nested expressions
    Variadic,
}

impl FieldFunction {
    /// All function tags
    pub const ALL: [FieldFunction; 14] = [
        Self::Field,
        Self::StringConstant,
        Self::NumberConstant,
        Self::NullConstant,
        Self::Sum,
        Self::Count,
        Self::Minimum,
        Self::Maximum,
        Self::Coalesce,
        Self::Month,
        Self::Year,
        Self::Multiply,
        Self::Divide,
        Self::Concat,
    ];

    /// Serialized name of the tag
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::StringConstant => "stringConstant",
            Self::NumberConstant => "numberConstant",
            Self::NullConstant => "nullConstant",
            Self::Sum => "sum",
            Self::Count => "count",
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
            Self::Coalesce => "coalesce",
            Self::Month => "month",
            Self::Year => "year",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Concat => "concat",
        }
    }

    /// SQL keyword used when rendering a function call, if any
    pub const fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::Sum => Some("SUM"),
            Self::Count => Some("COUNT"),
            Self::Minimum => Some("MIN"),
            Self::Maximum => Some("MAX"),
            Self::Coalesce => Some("COALESCE"),
            Self::Month => Some("MONTH"),
            Self::Year => Some("YEAR"),
            Self::Concat => Some("CONCAT"),
            Self::Multiply => Some("*"),
            Self::Divide => Some("/"),
            Self::Field | Self::StringConstant | Self::NumberConstant | Self::NullConstant => None,
        }
    }

    /// Number of operands this function takes
    pub const fn arity(&self) -> Arity {
        match self {
            Self::Field
            | Self::StringConstant
            | Self::NumberConstant
            | Self::NullConstant
            | Self::Count => Arity::None,
            Self::Sum | Self::Minimum | Self::Maximum | Self::Month | Self::Year => Arity::Unary,
            Self::Multiply | Self::Divide => Arity::Binary,
            Self::Coalesce | Self::Concat => Arity::Variadic,
        }
    }

    /// Check if this is an aggregate function
    pub const fn is_aggregate(&self) -> bool {
        matches!(self, Self::Sum | Self::Count | Self::Minimum | Self::Maximum)
    }

    /// Check if this is a constant tag
    pub const fn is_constant(&self) -> bool {
        matches!(
            self,
            Self::StringConstant | Self::NumberConstant | Self::NullConstant
        )
    }
}

impl fmt::Display for FieldFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matches_serde() {
        for function in FieldFunction::ALL {
            let json = serde_json::to_string(&function).unwrap();
            assert_eq!(json, format!("\"{}\"", function.name()));
        }
    }

    #[test]
    fn test_arity() {
        assert_eq!(FieldFunction::Count.arity(), Arity::None);
        assert_eq!(FieldFunction::Month.arity(), Arity::Unary);
        assert_eq!(FieldFunction::Divide.arity(), Arity::Binary);
        assert_eq!(FieldFunction::Concat.arity(), Arity::Variadic);
    }

    #[test]
    fn test_categories() {
        assert!(FieldFunction::Count.is_aggregate());
        assert!(!FieldFunction::Coalesce.is_aggregate());
        assert!(FieldFunction::NullConstant.is_constant());
        assert!(!FieldFunction::Field.is_constant());
    }
}
