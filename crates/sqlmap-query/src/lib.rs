//! Query-expression core for the sqlmap mapping layer
//!
//! This crate defines the value types a query description is built from:
//! - [`FieldExpression`]: an immutable tree describing a selectable column,
//!   constant, or function application (`SUM(total)`, `COUNT(*)`, ...)
//! - [`OrderSpecification`]: an ordered list of sort keys over such trees
//!
//! Both expose an attribute traversal that the SQL-generation layer uses to
//! find every column path, and therefore every join, a query needs.
//!
//! # Example
//!
//! ```
//! use sqlmap_query::{FieldExpression, OrderSpecification};
//!
//! let revenue = FieldExpression::sum_of(FieldExpression::multiply(
//!     FieldExpression::field("qty"),
//!     FieldExpression::field("price"),
//! ));
//! assert_eq!(revenue.attributes(), ["qty", "price"]);
//!
//! let mut order = OrderSpecification::empty();
//! order.add_field("customer.name").add_expression_with(revenue, false);
//! assert_eq!(order.attributes(), ["customer.name", "qty", "price"]);
//! ```

mod codec;
mod constant;
mod expression;
mod function;
mod order;
mod resolver;

pub use codec::*;
pub use constant::*;
pub use expression::*;
pub use function::*;
pub use order::*;
pub use resolver::*;
