//! sqlmap diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the
//! query-expression core and its tooling: error codes, document locations,
//! and diagnostic reporting.

mod error;
mod error_code;
mod location;

pub use error::*;
pub use error_code::*;
pub use location::*;

/// Result type for sqlmap operations
pub type Result<T> = std::result::Result<T, SqlMapError>;
