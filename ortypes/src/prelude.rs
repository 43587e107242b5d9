//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use ortypes::prelude::*;
//! ```

// Schema types
pub use ortypes_schema::{
    RawTypeInfo, SchemaError, TensorDataType, TypeInfo, TypeInfoLookup, ValueRegistry,
};

// Codegen types
pub use ortypes_codegen::{
    CodegenError, FormatterConfig, OperatorTypeUsage, TypeFormatter, is_unsupported_type_str,
};
