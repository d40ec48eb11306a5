//! Loading query documents from disk

use anyhow::Context;
use clap::ValueEnum;
use sqlmap_diagnostics::{SQM0401, SQM0404, SqlMapError};
use sqlmap_query::{Document, DocumentKind, JsonCodec};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Document kind selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum KindArg {
    /// Detect from the document's top-level members
    #[default]
    Auto,
    /// A single field expression
    Expression,
    /// An order specification
    Order,
}

impl KindArg {
    pub fn to_kind(self) -> Option<DocumentKind> {
        match self {
            Self::Auto => None,
            Self::Expression => Some(DocumentKind::Expression),
            Self::Order => Some(DocumentKind::Order),
        }
    }
}

/// Read and decode a document, keeping the structured error
pub fn decode_file(path: &Path, kind: KindArg) -> Result<Document, SqlMapError> {
    let content = fs::read_to_string(path).map_err(|e| {
        let code = if e.kind() == ErrorKind::NotFound {
            SQM0404
        } else {
            SQM0401
        };
        SqlMapError::system(code, e.to_string()).with_context(path.display().to_string())
    })?;
    log::debug!("read {} bytes from {}", content.len(), path.display());

    Ok(JsonCodec::new().decode_document(&content, kind.to_kind())?)
}

/// Read and decode a document for commands that stop at the first failure
pub fn read_document(path: &Path, kind: KindArg) -> anyhow::Result<Document> {
    decode_file(path, kind).with_context(|| format!("Failed to load {}", path.display()))
}
