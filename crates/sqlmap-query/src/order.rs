//! Order specifications: multi-key sort orders over field expressions

use crate::FieldExpression;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Ascending order (default)
    #[default]
    Ascending,
    /// Descending order
    Descending,
}

impl SortDirection {
    /// Check if this is ascending
    pub const fn is_ascending(&self) -> bool {
        matches!(self, Self::Ascending)
    }

    /// SQL keyword for this direction
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

impl From<bool> for SortDirection {
    fn from(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }
}

/// One sort key: an expression and a direction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderEntry {
    expression: FieldExpression,
    #[serde(default = "default_ascending")]
    ascending: bool,
}

fn default_ascending() -> bool {
    true
}

impl OrderEntry {
    pub fn new(expression: FieldExpression, ascending: bool) -> Self {
        Self {
            expression,
            ascending,
        }
    }

    pub fn ascending(expression: FieldExpression) -> Self {
        Self::new(expression, true)
    }

    pub fn descending(expression: FieldExpression) -> Self {
        Self::new(expression, false)
    }

    pub fn expression(&self) -> &FieldExpression {
        &self.expression
    }

    pub const fn is_ascending(&self) -> bool {
        self.ascending
    }

    pub fn direction(&self) -> SortDirection {
        SortDirection::from(self.ascending)
    }
}

impl fmt::Display for OrderEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.expression, self.direction().keyword())
    }
}

/// Ordered list of sort keys for a query
///
/// The first entry is the primary key, the second breaks ties of the first,
/// and so on. Two specifications are equal when they have the same entries
/// in the same order with the same directions.
///
/// A specification is owned by a single query description while it is being
/// built; mutation goes through `&mut self`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderSpecification {
    #[serde(default)]
    entries: Vec<OrderEntry>,
}

impl OrderSpecification {
    /// A specification with no entries, safe to append to unconditionally
    pub fn empty() -> Self {
        Self::default()
    }

    /// Ascending order by a single column
    pub fn by_field(path: impl Into<String>) -> Self {
        Self::by_field_with(path, true)
    }

    /// Order by a single column in the given direction
    pub fn by_field_with(path: impl Into<String>, ascending: bool) -> Self {
        Self::by_expression_with(FieldExpression::field(path), ascending)
    }

    /// Ascending order by a single expression
    pub fn by_expression(expression: FieldExpression) -> Self {
        Self::by_expression_with(expression, true)
    }

    /// Order by a single expression in the given direction
    pub fn by_expression_with(expression: FieldExpression, ascending: bool) -> Self {
        Self {
            entries: vec![OrderEntry::new(expression, ascending)],
        }
    }

    /// Append an ascending column key
    pub fn add_field(&mut self, path: impl Into<String>) -> &mut Self {
        self.add_field_with(path, true)
    }

    /// Append a column key in the given direction
    pub fn add_field_with(&mut self, path: impl Into<String>, ascending: bool) -> &mut Self {
        self.add_expression_with(FieldExpression::field(path), ascending)
    }

    /// Append an ascending expression key
    pub fn add_expression(&mut self, expression: FieldExpression) -> &mut Self {
        self.add_expression_with(expression, true)
    }

    /// Append an expression key in the given direction
    pub fn add_expression_with(&mut self, expression: FieldExpression, ascending: bool) -> &mut Self {
        self.add_entry(OrderEntry::new(expression, ascending))
    }

    /// Append a pre-built entry
    pub fn add_entry(&mut self, entry: OrderEntry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(&self) -> &[OrderEntry] {
        &self.entries
    }

    /// The live entry list, for in-place edits (reordering, removal)
    pub fn entries_mut(&mut self) -> &mut Vec<OrderEntry> {
        &mut self.entries
    }

    /// Replace all entries
    pub fn set_entries(&mut self, entries: impl IntoIterator<Item = OrderEntry>) {
        self.entries.clear();
        self.entries.extend(entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Column paths of every entry, in entry order, duplicates kept
    pub fn attributes(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for entry in &self.entries {
            entry.expression.collect_attributes(&mut out);
        }
        out
    }

    /// Referenced column paths without duplicates, in first-seen order
    pub fn distinct_attributes(&self) -> IndexSet<&str> {
        self.attributes().into_iter().collect()
    }
}

impl From<OrderEntry> for OrderSpecification {
    fn from(entry: OrderEntry) -> Self {
        Self {
            entries: vec![entry],
        }
    }
}

impl FromIterator<OrderEntry> for OrderSpecification {
    fn from_iter<I: IntoIterator<Item = OrderEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OrderSpecification {
    type Item = &'a OrderEntry;
    type IntoIter = std::slice::Iter<'a, OrderEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Renders as an ORDER BY list: `name ASC, SUM(total) DESC`
impl fmt::Display for OrderSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}
