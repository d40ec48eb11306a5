//! CLI functionality for the sqlmap tool
//!
//! This module contains all CLI-related functionality including:
//! - Document loading
//! - Attribute listing
//! - Rendering
//! - Validation
//! - Re-encoding
//! - Output formatting

pub mod attributes;
pub mod check;
pub mod format;
pub mod load;
pub mod output;
pub mod render;
