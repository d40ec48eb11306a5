//! Render command implementation

use super::{load, output};
use anyhow::Result;
use sqlmap_query::Document;
use std::path::PathBuf;

/// Configuration for render command
pub struct RenderConfig {
    pub file: PathBuf,
    pub kind: load::KindArg,
    pub output_file: Option<PathBuf>,
}

/// Print the SQL-like form of a document
pub fn render(config: RenderConfig) -> Result<()> {
    let document = load::read_document(&config.file, config.kind)?;
    output::write_output(&render_document(&document), config.output_file.as_deref())
}

pub fn render_document(document: &Document) -> String {
    match document {
        Document::Order(order) if order.is_empty() => "(no ordering)".to_string(),
        other => other.to_string(),
    }
}
