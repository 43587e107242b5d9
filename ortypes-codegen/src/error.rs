//! Error types for code generation.

use ortypes_schema::TensorDataType;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema decoding or lookup error.
    #[error("schema error: {0}")]
    Schema(#[from] ortypes_schema::SchemaError),

    /// Element type with no entry in the type name table.
    #[error("no C++ type name for tensor data type {tag}")]
    UnknownScalarTag {
        /// Raw tag value.
        tag: i32,
    },

    /// Element type that generated code cannot represent.
    #[error("{} is not supported", .tag.schema_name().to_lowercase())]
    UnsupportedScalarType {
        /// Offending element type.
        tag: TensorDataType,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
