//! # ortypes
//!
//! C++ type names for ORT format model values.
//!
//! ortypes maps the type descriptors stored in an ORT format model (tensor
//! element types, maps and sequences) to the C++ type names used when
//! generating typed kernel registration code.
//!
//! ## Features
//!
//! - **Closed element type table** - Every schema element type maps to exactly one name
//! - **Composite types** - Maps render as `map<K,V>`, sequences as their element type
//! - **Checked formatting** - Reject complex element types at generation time
//! - **Type usage collection** - Per-operator input/output type sets as JSON
//!
//! ## Quick Start
//!
//! ```ignore
//! use ortypes::prelude::*;
//!
//! let registry = ValueRegistry::from_entries([(
//!     "scores",
//!     TypeInfo::map(TensorDataType::Int64, TypeInfo::tensor(TensorDataType::Float)),
//! )])?;
//!
//! let formatter = TypeFormatter::new();
//! assert_eq!(formatter.value_name_to_type_str("scores", &registry)?, "map<int64_t,float>");
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Element types, type descriptors, value registry
//! - [`codegen`] - Type name formatting and type usage collection

pub mod prelude;

/// Element types, type descriptors and value registry.
pub mod schema {
    pub use ortypes_schema::*;
}

/// Type name formatting.
pub mod codegen {
    pub use ortypes_codegen::*;
}

// Re-export commonly used items at the crate root
pub use ortypes_codegen::{
    CodegenError, FormatterConfig, OperatorTypeUsage, TypeFormatter, value_name_to_type_str,
};
pub use ortypes_schema::{SchemaError, TensorDataType, TypeInfo, ValueRegistry};
