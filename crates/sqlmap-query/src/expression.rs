//! Field expression trees
//!
//! A [`FieldExpression`] is an immutable node that is either a column
//! reference, a constant, or a function applied to operands. Trees are built
//! bottom-up through the named constructors and can never contain a cycle.

use crate::{Arity, ConstantValue, FieldFunction};
use indexmap::IndexSet;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlmap_diagnostics::{
    SQM0100, SQM0101, SQM0102, SQM0103, SQM0104, SQM0105, SqlMapError,
};
use std::fmt;

/// A selectable or orderable query term
///
/// Equality and hashing are structural over the function tag, field path,
/// children (in order) and constant value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawFieldExpression")]
pub struct FieldExpression {
    function: FieldFunction,
    #[serde(skip_serializing_if = "Option::is_none")]
    field_path: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<FieldExpression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    constant_value: Option<ConstantValue>,
}

impl FieldExpression {
    const fn leaf(function: FieldFunction) -> Self {
        Self {
            function,
            field_path: None,
            children: Vec::new(),
            constant_value: None,
        }
    }

    fn with_path(function: FieldFunction, path: impl Into<String>) -> Self {
        Self {
            field_path: Some(path.into()),
            ..Self::leaf(function)
        }
    }

    fn with_children(function: FieldFunction, children: Vec<FieldExpression>) -> Self {
        Self {
            children,
            ..Self::leaf(function)
        }
    }

    fn with_constant(function: FieldFunction, value: ConstantValue) -> Self {
        Self {
            constant_value: Some(value),
            ..Self::leaf(function)
        }
    }

    // === References and constants ===

    /// Reference a column by its path (e.g. `"customer.name"`)
    pub fn field(path: impl Into<String>) -> Self {
        Self::with_path(FieldFunction::Field, path)
    }

    /// SQL NULL
    pub const fn constant_null() -> Self {
        Self::leaf(FieldFunction::NullConstant)
    }

    /// String constant
    pub fn constant_string(value: impl Into<String>) -> Self {
        Self::with_constant(
            FieldFunction::StringConstant,
            ConstantValue::String(value.into()),
        )
    }

    /// Numeric constant
    pub fn constant_number(value: impl Into<Decimal>) -> Self {
        Self::with_constant(
            FieldFunction::NumberConstant,
            ConstantValue::Number(value.into()),
        )
    }

    // === Aggregates ===

    /// `COUNT(*)`
    pub const fn count() -> Self {
        Self::leaf(FieldFunction::Count)
    }

    /// `SUM(path)`
    pub fn sum(path: impl Into<String>) -> Self {
        Self::with_path(FieldFunction::Sum, path)
    }

    /// `SUM(expr)`
    pub fn sum_of(expr: FieldExpression) -> Self {
        Self::with_children(FieldFunction::Sum, vec![expr])
    }

    /// `MIN(path)`
    pub fn minimum(path: impl Into<String>) -> Self {
        Self::with_path(FieldFunction::Minimum, path)
    }

    /// `MIN(expr)`
    pub fn minimum_of(expr: FieldExpression) -> Self {
        Self::with_children(FieldFunction::Minimum, vec![expr])
    }

    /// `MAX(path)`
    pub fn maximum(path: impl Into<String>) -> Self {
        Self::with_path(FieldFunction::Maximum, path)
    }

    /// `MAX(expr)`
    pub fn maximum_of(expr: FieldExpression) -> Self {
        Self::with_children(FieldFunction::Maximum, vec![expr])
    }

    // === Scalar functions ===

    /// `MONTH(path)`
    pub fn month(path: impl Into<String>) -> Self {
        Self::with_path(FieldFunction::Month, path)
    }

    /// `MONTH(expr)`
    pub fn month_of(expr: FieldExpression) -> Self {
        Self::with_children(FieldFunction::Month, vec![expr])
    }

    /// `YEAR(path)`
    pub fn year(path: impl Into<String>) -> Self {
        Self::with_path(FieldFunction::Year, path)
    }

    /// `YEAR(expr)`
    pub fn year_of(expr: FieldExpression) -> Self {
        Self::with_children(FieldFunction::Year, vec![expr])
    }

    /// `left * right`
    pub fn multiply(left: FieldExpression, right: FieldExpression) -> Self {
        Self::with_children(FieldFunction::Multiply, vec![left, right])
    }

    /// `dividend / divisor`
    pub fn divide(dividend: FieldExpression, divisor: FieldExpression) -> Self {
        Self::with_children(FieldFunction::Divide, vec![dividend, divisor])
    }

    /// `CONCAT(a, b, ...)`
    ///
    /// Operands must already be expressions; wrap column paths with
    /// [`FieldExpression::field`].
    pub fn concat(operands: impl IntoIterator<Item = FieldExpression>) -> Self {
        Self::with_children(FieldFunction::Concat, operands.into_iter().collect())
    }

    /// `COALESCE(a, b, ...)`: the first non-null operand, or NULL
    pub fn coalesce(operands: impl IntoIterator<Item = FieldExpression>) -> Self {
        Self::with_children(FieldFunction::Coalesce, operands.into_iter().collect())
    }

    /// `COALESCE` over column paths, each wrapped as a plain field operand
    pub fn coalesce_fields<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::coalesce(paths.into_iter().map(Self::field))
    }

    // === Accessors ===

    /// The function tag of this node
    pub const fn function(&self) -> FieldFunction {
        self.function
    }

    /// Column path, set for plain fields and unary functions built from a path
    pub fn field_path(&self) -> Option<&str> {
        self.field_path.as_deref()
    }

    /// Child expressions in operand order
    pub fn children(&self) -> &[FieldExpression] {
        &self.children
    }

    /// Value of a string or numeric constant
    pub fn constant_value(&self) -> Option<&ConstantValue> {
        self.constant_value.as_ref()
    }

    /// Visit every node in depth-first pre-order
    pub fn walk<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a FieldExpression),
    {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Every column path referenced in the tree, in pre-order
    ///
    /// Duplicates are kept: `multiply(field("a"), field("a"))` yields
    /// `["a", "a"]`. Use [`distinct_attributes`](Self::distinct_attributes)
    /// for a join set.
    pub fn attributes(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_attributes(&mut out);
        out
    }

    /// Referenced column paths without duplicates, in first-seen order
    pub fn distinct_attributes(&self) -> IndexSet<&str> {
        self.attributes().into_iter().collect()
    }

    pub(crate) fn collect_attributes<'a>(&'a self, out: &mut Vec<&'a str>) {
        self.walk(&mut |node| {
            if let Some(path) = node.field_path() {
                out.push(path);
            }
        });
    }

    fn write_call(&self, f: &mut fmt::Formatter<'_>, keyword: &str) -> fmt::Result {
        write!(f, "{}(", keyword)?;
        let mut first = true;
        if let Some(path) = &self.field_path {
            f.write_str(path)?;
            first = false;
        }
        for child in &self.children {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}", child)?;
            first = false;
        }
        f.write_str(")")
    }
}

/// SQL-like rendering for diagnostics: `SUM(total)`, `(qty * price)`
impl fmt::Display for FieldExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.function {
            FieldFunction::Field => f.write_str(self.field_path.as_deref().unwrap_or_default()),
            FieldFunction::StringConstant | FieldFunction::NumberConstant => {
                match &self.constant_value {
                    Some(value) => write!(f, "{}", value),
                    None => f.write_str("NULL"),
                }
            }
            FieldFunction::NullConstant => f.write_str("NULL"),
            FieldFunction::Count => f.write_str("COUNT(*)"),
            FieldFunction::Multiply | FieldFunction::Divide => {
                let op = if self.function == FieldFunction::Multiply { "*" } else { "/" };
                match self.children.as_slice() {
                    [left, right] => write!(f, "({} {} {})", left, op, right),
                    _ => self.write_call(f, op),
                }
            }
            function => self.write_call(f, function.keyword().unwrap_or(function.name())),
        }
    }
}

/// Wire form of a node before its shape has been checked
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawFieldExpression {
    function: FieldFunction,
    #[serde(default)]
    field_path: Option<String>,
    #[serde(default)]
    children: Vec<FieldExpression>,
    #[serde(default)]
    constant_value: Option<ConstantValue>,
}

impl TryFrom<RawFieldExpression> for FieldExpression {
    type Error = SqlMapError;

    fn try_from(raw: RawFieldExpression) -> Result<Self, Self::Error> {
        let function = raw.function;
        let name = function.name();
        let has_path = raw.field_path.is_some();
        let operands = raw.children.len();

        match (function, &raw.constant_value) {
            (FieldFunction::StringConstant, Some(ConstantValue::String(_)))
            | (FieldFunction::NumberConstant, Some(ConstantValue::Number(_))) => {}
            (FieldFunction::StringConstant, _) => {
                return Err(SqlMapError::structure(
                    SQM0103,
                    name,
                    "expected a string constant value",
                ));
            }
            (FieldFunction::NumberConstant, _) => {
                return Err(SqlMapError::structure(
                    SQM0103,
                    name,
                    "expected a numeric constant value",
                ));
            }
            (_, Some(_)) => {
                return Err(SqlMapError::structure(
                    SQM0104,
                    name,
                    "only string and numeric constants carry a value",
                ));
            }
            (_, None) => {}
        }

        match function.arity() {
            Arity::None => {
                if function == FieldFunction::Field && !has_path {
                    return Err(SqlMapError::structure(SQM0102, name, "missing field path"));
                }
                if function != FieldFunction::Field && has_path {
                    return Err(SqlMapError::structure(
                        SQM0101,
                        name,
                        "unexpected field path",
                    ));
                }
                if operands > 0 {
                    return Err(SqlMapError::structure(
                        SQM0100,
                        name,
                        format!("expected no operands, found {operands}"),
                    ));
                }
            }
            Arity::Unary => match (has_path, operands) {
                (true, 0) | (false, 1) => {}
                (true, _) => {
                    return Err(SqlMapError::structure(
                        SQM0105,
                        name,
                        "both a field path and a nested operand were given",
                    ));
                }
                (false, 0) => {
                    return Err(SqlMapError::structure(
                        SQM0102,
                        name,
                        "missing field path or operand",
                    ));
                }
                (false, n) => {
                    return Err(SqlMapError::structure(
                        SQM0100,
                        name,
                        format!("expected 1 operand, found {n}"),
                    ));
                }
            },
            Arity::Binary | Arity::Variadic => {
                if has_path {
                    return Err(SqlMapError::structure(
                        SQM0101,
                        name,
                        "unexpected field path",
                    ));
                }
                if function.arity() == Arity::Binary && operands != 2 {
                    return Err(SqlMapError::structure(
                        SQM0100,
                        name,
                        format!("expected 2 operands, found {operands}"),
                    ));
                }
            }
        }

        Ok(Self {
            function,
            field_path: raw.field_path,
            children: raw.children,
            constant_value: raw.constant_value,
        })
    }
}
