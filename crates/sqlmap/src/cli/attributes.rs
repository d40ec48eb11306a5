//! Attributes command implementation

use super::{load, output};
use anyhow::Result;
use sqlmap_query::Document;
use std::path::PathBuf;

/// Configuration for attributes command
pub struct AttributesConfig {
    pub file: PathBuf,
    pub kind: load::KindArg,
    pub distinct: bool,
    pub output_file: Option<PathBuf>,
}

/// Print every column path a document references, one per line
pub fn attributes(config: AttributesConfig) -> Result<()> {
    let document = load::read_document(&config.file, config.kind)?;
    let content = list_attributes(&document, config.distinct);
    output::write_output(&content, config.output_file.as_deref())
}

/// Newline-separated attribute list
pub fn list_attributes(document: &Document, distinct: bool) -> String {
    if distinct {
        document
            .distinct_attributes()
            .into_iter()
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        document.attributes().join("\n")
    }
}
