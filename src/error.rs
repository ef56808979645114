use std::path::PathBuf;
use thiserror::Error;

/// The main error type for shpcodec operations.
#[derive(Debug, Error)]
pub enum ShpError {
    #[error("Truncated input: source exhausted while reading {field}")]
    TruncatedInput { field: &'static str },

    #[error("Invalid length for {field}: {value}")]
    InvalidLength { field: &'static str, value: i64 },

    #[error("Write failed: {0}")]
    WriteFailure(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown shape type code {0}")]
    UnknownShapeType(i32),

    #[error("Unsupported shape type: {0}")]
    UnsupportedShapeType(String),

    #[error("Unknown DBF field type tag {0:#04x}")]
    UnknownFieldType(u8),

    #[error("Unknown DBF field type '{0}' (expected C, N, F or D)")]
    UnknownFieldTypeName(String),

    #[error("Field name '{name}' is {len} bytes long (maximum is 11)")]
    NameTooLong { name: String, len: usize },

    #[error("Failed to parse geometry JSON from {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write geometry JSON: {0}")]
    JsonWrite(#[source] serde_json::Error),
}
