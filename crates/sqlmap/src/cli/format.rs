//! Format command implementation

use super::{load, output};
use anyhow::{Context, Result};
use sqlmap_query::JsonCodec;
use std::path::PathBuf;

/// Configuration for format command
pub struct FormatConfig {
    pub file: PathBuf,
    pub kind: load::KindArg,
    pub pretty: bool,
    pub output_file: Option<PathBuf>,
}

/// Re-encode a document in canonical JSON form
pub fn format(config: FormatConfig) -> Result<()> {
    let document = load::read_document(&config.file, config.kind)?;
    let codec = JsonCodec {
        pretty: config.pretty,
    };
    let json = codec
        .encode(&document)
        .context("Failed to encode document")?;
    output::write_output(&json, config.output_file.as_deref())
}
