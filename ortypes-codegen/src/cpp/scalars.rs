//! Tensor element type to C++ type name table.

use ortypes_schema::TensorDataType;

/// Placeholder emitted for `COMPLEX64` elements.
pub const COMPLEX64_UNSUPPORTED: &str = "complex64 is not supported";

/// Placeholder emitted for `COMPLEX128` elements.
pub const COMPLEX128_UNSUPPORTED: &str = "complex128 is not supported";

/// C++ type names by element type. `UNDEFINED` has no entry.
pub static SCALAR_TYPE_NAMES: [(TensorDataType, &str); 16] = [
    (TensorDataType::Float, "float"),
    (TensorDataType::Uint8, "uint8_t"),
    (TensorDataType::Int8, "int8_t"),
    (TensorDataType::Uint16, "uint16_t"),
    (TensorDataType::Int16, "int16_t"),
    (TensorDataType::Int32, "int32_t"),
    (TensorDataType::Int64, "int64_t"),
    (TensorDataType::String, "std::string"),
    (TensorDataType::Bool, "bool"),
    (TensorDataType::Float16, "MLFloat16"),
    (TensorDataType::Double, "double"),
    (TensorDataType::Uint32, "uint32_t"),
    (TensorDataType::Uint64, "uint64_t"),
    (TensorDataType::Complex64, COMPLEX64_UNSUPPORTED),
    (TensorDataType::Complex128, COMPLEX128_UNSUPPORTED),
    (TensorDataType::Bfloat16, "BFloat16"),
];

/// Looks up the C++ type name for an element type.
#[must_use]
pub fn scalar_type_name(tag: TensorDataType) -> Option<&'static str> {
    SCALAR_TYPE_NAMES
        .iter()
        .find(|(ty, _)| *ty == tag)
        .map(|&(_, name)| name)
}

/// Returns true if `type_str` contains a "not supported" placeholder.
///
/// Composite strings such as `map<int64_t,complex64 is not supported>` are
/// detected as well.
#[must_use]
pub fn is_unsupported_type_str(type_str: &str) -> bool {
    type_str.contains(COMPLEX64_UNSUPPORTED) || type_str.contains(COMPLEX128_UNSUPPORTED)
}
