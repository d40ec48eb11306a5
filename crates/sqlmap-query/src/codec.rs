//! JSON encoding of expressions and order specifications
//!
//! Query descriptions may be built in one component and executed in another,
//! so both value types round-trip through JSON with full structural
//! fidelity. Decoding validates every expression node against its function's
//! shape.

use std::fmt;
use std::io::{Read, Write};

use indexmap::IndexSet;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use sqlmap_diagnostics::{
    ErrorCode, SQM0001, SQM0002, SQM0003, SQM0004, SQM0401, SourceLocation, SqlMapError,
};

use crate::{FieldExpression, OrderSpecification};

/// Errors that can occur while encoding or decoding
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// JSON syntax or data error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Data error raised after the root value was read, located at its end
    #[error("JSON error: {source}")]
    JsonAt {
        source: serde_json::Error,
        location: SourceLocation,
    },

    /// The document is neither an expression nor an order specification
    #[error("unrecognized document: {0}")]
    UnknownDocument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// Error code for this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Json(e) | Self::JsonAt { source: e, .. } => match e.classify() {
                Category::Syntax => SQM0001,
                Category::Eof => SQM0002,
                Category::Data => SQM0004,
                Category::Io => SQM0401,
            },
            Self::UnknownDocument(_) => SQM0003,
            Self::Io(_) => SQM0401,
        }
    }

    /// Location in the input, when the JSON parser reported one
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            Self::Json(e) if e.line() > 0 => Some(SourceLocation::new(e.line(), e.column())),
            Self::JsonAt { location, .. } => Some(location.clone()),
            _ => None,
        }
    }
}

impl From<CodecError> for SqlMapError {
    fn from(err: CodecError) -> Self {
        let code = err.code();
        let location = err.location();
        match err {
            CodecError::Io(e) => SqlMapError::system(code, e.to_string()),
            other => match location {
                Some(loc) => SqlMapError::codec_at(code, other.to_string(), loc),
                None => SqlMapError::codec(code, other.to_string()),
            },
        }
    }
}

/// Which value type a document holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// A single [`FieldExpression`]
    Expression,
    /// An [`OrderSpecification`]
    Order,
}

impl DocumentKind {
    /// Guess the kind from the top-level members of a JSON object
    pub fn detect(value: &serde_json::Value) -> Option<Self> {
        let object = value.as_object()?;
        // `{}` is an ordering with its entries omitted
        if object.contains_key("entries") || object.is_empty() {
            Some(Self::Order)
        } else if object.contains_key("function") {
            Some(Self::Expression)
        } else {
            None
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression => write!(f, "expression"),
            Self::Order => write!(f, "order"),
        }
    }
}

/// A decoded document of either kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Expression(FieldExpression),
    Order(OrderSpecification),
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Expression(_) => DocumentKind::Expression,
            Self::Order(_) => DocumentKind::Order,
        }
    }

    /// Column paths referenced by the document, duplicates kept
    pub fn attributes(&self) -> Vec<&str> {
        match self {
            Self::Expression(expr) => expr.attributes(),
            Self::Order(order) => order.attributes(),
        }
    }

    /// Column paths referenced by the document, in first-seen order
    pub fn distinct_attributes(&self) -> IndexSet<&str> {
        match self {
            Self::Expression(expr) => expr.distinct_attributes(),
            Self::Order(order) => order.distinct_attributes(),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression(expr) => write!(f, "{}", expr),
            Self::Order(order) => write!(f, "{}", order),
        }
    }
}

impl From<FieldExpression> for Document {
    fn from(expr: FieldExpression) -> Self {
        Self::Expression(expr)
    }
}

impl From<OrderSpecification> for Document {
    fn from(order: OrderSpecification) -> Self {
        Self::Order(order)
    }
}

/// JSON codec for query documents
#[derive(Debug, Default, Clone)]
pub struct JsonCodec {
    /// Whether to produce pretty-printed output
    pub pretty: bool,
}

impl JsonCodec {
    /// Create a new compact JSON codec
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new JSON codec with pretty-printing enabled
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Encode a value to a string
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<String, CodecError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        log::trace!("encoded {} bytes of JSON", json.len());
        Ok(json)
    }

    /// Encode a value to a writer
    pub fn encode_to_writer<T: Serialize, W: Write>(
        &self,
        value: &T,
        mut writer: W,
    ) -> Result<(), CodecError> {
        let json = self.encode(value)?;
        writer.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Decode a value from a string
    ///
    /// serde_json reports no position for errors raised while converting the
    /// root value, so those are located at the last character of the input.
    pub fn decode<T: DeserializeOwned>(&self, input: &str) -> Result<T, CodecError> {
        log::trace!("decoding {} bytes of JSON", input.len());
        serde_json::from_str(input).map_err(|e| locate(e, input))
    }

    /// Decode a value from a reader
    pub fn decode_from_reader<T: DeserializeOwned, R: Read>(
        &self,
        mut reader: R,
    ) -> Result<T, CodecError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.decode(&content)
    }

    /// Decode a document, detecting its kind unless one is given
    pub fn decode_document(
        &self,
        input: &str,
        kind: Option<DocumentKind>,
    ) -> Result<Document, CodecError> {
        let kind = match kind {
            Some(kind) => kind,
            None => {
                let value: serde_json::Value = serde_json::from_str(input)?;
                DocumentKind::detect(&value).ok_or_else(|| {
                    CodecError::UnknownDocument(
                        "expected an object with a \"function\" or \"entries\" member".to_string(),
                    )
                })?
            }
        };
        log::debug!("decoding {} document", kind);

        // Decode from the text again so errors keep their line and column
        Ok(match kind {
            DocumentKind::Expression => Document::Expression(self.decode(input)?),
            DocumentKind::Order => Document::Order(self.decode(input)?),
        })
    }
}

fn locate(err: serde_json::Error, input: &str) -> CodecError {
    if err.line() > 0 || err.classify() != Category::Data {
        return CodecError::Json(err);
    }
    let end = input.trim_end().len().saturating_sub(1);
    CodecError::JsonAt {
        source: err,
        location: SourceLocation::from_offset(input, end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_kind() {
        let order = serde_json::json!({ "entries": [] });
        let expr = serde_json::json!({ "function": "count" });
        assert_eq!(DocumentKind::detect(&order), Some(DocumentKind::Order));
        assert_eq!(DocumentKind::detect(&expr), Some(DocumentKind::Expression));
        assert_eq!(
            DocumentKind::detect(&serde_json::json!({})),
            Some(DocumentKind::Order)
        );
        assert_eq!(DocumentKind::detect(&serde_json::json!([1, 2])), None);
    }

    #[test]
    fn test_error_codes() {
        let codec = JsonCodec::new();
        let syntax = codec.decode::<FieldExpression>("{ nope").unwrap_err();
        assert_eq!(syntax.code(), SQM0001);
        assert!(syntax.location().is_some());

        let eof = codec.decode::<FieldExpression>("{\"function\": ").unwrap_err();
        assert_eq!(eof.code(), SQM0002);

        let unknown = codec.decode_document("{\"x\": 1}", None).unwrap_err();
        assert_eq!(unknown.code(), SQM0003);
    }

    #[test]
    fn test_into_sqlmap_error() {
        let err = JsonCodec::new()
            .decode::<FieldExpression>("{\"function\": \"divide\"}")
            .unwrap_err();
        let err = SqlMapError::from(err);
        assert_eq!(err.code(), SQM0004);
        assert!(err.to_string().contains("SQM0100"));
        assert_eq!(err.location(), Some(&SourceLocation::new(1, 22)));
    }

    #[test]
    fn test_root_structure_error_location() {
        let input = "{\"function\": \"multiply\",\n \"children\": [{\"function\": \"count\"}]}\n";
        let err = JsonCodec::new()
            .decode::<FieldExpression>(input)
            .unwrap_err();
        assert!(matches!(err, CodecError::JsonAt { .. }));
        assert_eq!(err.code(), SQM0004);
        assert_eq!(err.location(), Some(SourceLocation::new(2, 37)));
    }
}
