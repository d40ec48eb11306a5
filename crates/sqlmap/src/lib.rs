//! sqlmap: query-expression core of a small object-relational mapping layer
//!
//! This crate bundles:
//! - Field expressions: column references, constants, and function trees
//! - Order specifications over those expressions
//! - JSON encoding with structural validation
//! - Diagnostics shared by the library and the `sqlmap` inspection tool
//!
//! # Example
//!
//! ```
//! use sqlmap::{FieldExpression, JsonCodec, OrderSpecification};
//!
//! let mut order = OrderSpecification::empty();
//! order
//!     .add_field("customer.name")
//!     .add_expression_with(FieldExpression::sum("total"), false);
//!
//! let codec = JsonCodec::new();
//! let json = codec.encode(&order)?;
//! let decoded: OrderSpecification = codec.decode(&json)?;
//! assert_eq!(decoded, order);
//! assert_eq!(decoded.to_string(), "customer.name ASC, SUM(total) DESC");
//! # Ok::<(), sqlmap::query::CodecError>(())
//! ```

// Re-export all public APIs from internal crates
pub use sqlmap_diagnostics as diagnostics;
pub use sqlmap_query as query;

// Convenience re-exports
pub use sqlmap_diagnostics::{Result, SqlMapError};
pub use sqlmap_query::{
    Document, DocumentKind, FieldExpression, FieldFunction, JsonCodec, OrderEntry,
    OrderSpecification,
};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
