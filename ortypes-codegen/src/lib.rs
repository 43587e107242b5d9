//! # ortypes Codegen
//!
//! C++ type name generation from ORT format model type descriptors.
//!
//! This crate provides:
//! - Tensor element type to C++ type name mapping
//! - Map and sequence type formatting
//! - Value name resolution against a type registry
//! - Per-operator type usage collection

pub mod config;
pub mod cpp;
pub mod error;

pub use config::FormatterConfig;
pub use cpp::{OperatorTypeUsage, TypeFormatter, is_unsupported_type_str};
pub use error::CodegenError;

use ortypes_schema::TypeInfoLookup;

/// Looks up a value name and returns its C++ type name with default settings.
///
/// # Arguments
/// * `name` - Graph value name
/// * `lookup` - Value name to type descriptor mapping
///
/// # Returns
/// The C++ type name as a string.
///
/// # Errors
/// Returns `CodegenError` if the name is missing or its type cannot be
/// formatted.
pub fn value_name_to_type_str<L>(name: &str, lookup: &L) -> Result<String, CodegenError>
where
    L: TypeInfoLookup + ?Sized,
{
    TypeFormatter::new().value_name_to_type_str(name, lookup)
}
