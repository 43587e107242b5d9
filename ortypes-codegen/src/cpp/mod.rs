//! C++ type name generation modules.

pub mod scalars;
pub mod types;
pub mod usage;

pub use scalars::{is_unsupported_type_str, scalar_type_name};
pub use types::TypeFormatter;
pub use usage::OperatorTypeUsage;
