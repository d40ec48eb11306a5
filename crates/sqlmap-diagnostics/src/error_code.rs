//! sqlmap error codes following a structured numbering system
//!
//! Error code ranges:
//! - SQM0001-SQM0099: Codec errors (malformed or unrecognized documents)
//! - SQM0100-SQM0149: Structural errors (a node breaks its function's shape)
//! - SQM0150-SQM0199: Structural warnings (well-formed but likely unintended)
//! - SQM0400-SQM0499: System errors (I/O, configuration)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a codec error (0001-0099)
    pub const fn is_codec_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a structural error or warning (0100-0199)
    pub const fn is_structure_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a system error (0400-0499)
    pub const fn is_system_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SQM{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Codec errors (0001-0099)
    map.insert(1, ErrorInfo::new("Malformed JSON"));
    map.insert(2, ErrorInfo::new("Unexpected end of document"));
    map.insert(
        3,
        ErrorInfo::new("Document does not describe an expression or ordering")
            .with_help("Expressions carry a \"function\" member, orderings an \"entries\" member"),
    );
    map.insert(4, ErrorInfo::new("Invalid member value"));

    // Structural errors (0100-0149)
    map.insert(
        100,
        ErrorInfo::new("Invalid operand count")
            .with_help("multiply and divide take exactly two operands"),
    );
    map.insert(101, ErrorInfo::new("Field path not allowed for this function"));
    map.insert(102, ErrorInfo::new("Missing field path or operand"));
    map.insert(103, ErrorInfo::new("Missing constant value"));
    map.insert(104, ErrorInfo::new("Constant value not allowed for this function"));
    map.insert(
        105,
        ErrorInfo::new("Conflicting operands")
            .with_help("A unary function takes either a field path or one nested expression"),
    );

    // Structural warnings (0150-0199)
    map.insert(
        150,
        ErrorInfo::new("Empty field path")
            .with_help("The mapping layer will fail to resolve an empty column path"),
    );
    map.insert(151, ErrorInfo::new("Function without operands"));
    map.insert(152, ErrorInfo::new("Empty order specification"));

    // System errors (0400-0499)
    map.insert(401, ErrorInfo::new("I/O error"));
    map.insert(404, ErrorInfo::new("File not found"));

    map
});

// Codec errors
pub const SQM0001: ErrorCode = ErrorCode::new(1);
pub const SQM0002: ErrorCode = ErrorCode::new(2);
pub const SQM0003: ErrorCode = ErrorCode::new(3);
pub const SQM0004: ErrorCode = ErrorCode::new(4);

// Structural errors
pub const SQM0100: ErrorCode = ErrorCode::new(100);
pub const SQM0101: ErrorCode = ErrorCode::new(101);
pub const SQM0102: ErrorCode = ErrorCode::new(102);
pub const SQM0103: ErrorCode = ErrorCode::new(103);
pub const SQM0104: ErrorCode = ErrorCode::new(104);
pub const SQM0105: ErrorCode = ErrorCode::new(105);

// Structural warnings
pub const SQM0150: ErrorCode = ErrorCode::new(150);
pub const SQM0151: ErrorCode = ErrorCode::new(151);
pub const SQM0152: ErrorCode = ErrorCode::new(152);

// System errors
pub const SQM0401: ErrorCode = ErrorCode::new(401);
pub const SQM0404: ErrorCode = ErrorCode::new(404);
