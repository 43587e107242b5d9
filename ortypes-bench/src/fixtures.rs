//! Descriptor and registry fixtures.

use ortypes_schema::{RawTypeInfo, TensorDataType, TypeInfo, ValueRegistry};

/// Builds a descriptor of `depth` nested maps around a float tensor.
#[must_use]
pub fn nested_map(depth: usize) -> TypeInfo {
    (0..depth).fold(TypeInfo::tensor(TensorDataType::Float), |inner, _| {
        TypeInfo::map(TensorDataType::Int64, inner)
    })
}

/// Raw counterpart of [`nested_map`].
#[must_use]
pub fn nested_raw_map(depth: usize) -> RawTypeInfo {
    (0..depth).fold(
        RawTypeInfo::tensor(TensorDataType::Float.raw()),
        |inner, _| RawTypeInfo::map(TensorDataType::Int64.raw(), inner),
    )
}

/// Builds a registry of `count` values cycling through every named element type.
#[must_use]
pub fn registry(count: usize) -> ValueRegistry {
    let elem_types: Vec<_> = TensorDataType::ALL
        .into_iter()
        .filter(|ty| *ty != TensorDataType::Undefined && !ty.is_complex())
        .collect();

    let mut registry = ValueRegistry::new();
    for i in 0..count {
        let elem_type = elem_types[i % elem_types.len()];
        let info = if i % 3 == 0 {
            TypeInfo::sequence(TypeInfo::tensor(elem_type))
        } else {
            TypeInfo::tensor(elem_type)
        };
        // Names are unique by construction.
        let _ = registry.insert(value_name(i), info);
    }
    registry
}

/// Name of the `i`th value in [`registry`].
#[must_use]
pub fn value_name(i: usize) -> String {
    format!("value_{i}")
}
