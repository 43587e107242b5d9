//! Schema type definitions.
//!
//! This module contains the tensor element type enumeration and the decoded
//! type descriptor used by code generation.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};

/// Tensor element data types defined by the ORT format schema.
///
/// Discriminants match the serialized values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum TensorDataType {
    /// Unset value (flatbuffer default).
    Undefined = 0,
    /// 32-bit floating point.
    Float = 1,
    /// Unsigned 8-bit integer.
    Uint8 = 2,
    /// Signed 8-bit integer.
    Int8 = 3,
    /// Unsigned 16-bit integer.
    Uint16 = 4,
    /// Signed 16-bit integer.
    Int16 = 5,
    /// Signed 32-bit integer.
    Int32 = 6,
    /// Signed 64-bit integer.
    Int64 = 7,
    /// UTF-8 string.
    String = 8,
    /// Boolean.
    Bool = 9,
    /// IEEE 754 half precision float.
    Float16 = 10,
    /// 64-bit floating point.
    Double = 11,
    /// Unsigned 32-bit integer.
    Uint32 = 12,
    /// Unsigned 64-bit integer.
    Uint64 = 13,
    /// Complex number with 32-bit real and imaginary parts.
    Complex64 = 14,
    /// Complex number with 64-bit real and imaginary parts.
    Complex128 = 15,
    /// Brain floating point (16-bit).
    Bfloat16 = 16,
}

impl TensorDataType {
    /// All defined values in discriminant order.
    pub const ALL: [Self; 17] = [
        Self::Undefined,
        Self::Float,
        Self::Uint8,
        Self::Int8,
        Self::Uint16,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::String,
        Self::Bool,
        Self::Float16,
        Self::Double,
        Self::Uint32,
        Self::Uint64,
        Self::Complex64,
        Self::Complex128,
        Self::Bfloat16,
    ];

    /// Decodes a raw serialized value.
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownScalarTag` if the value is not defined.
    pub fn from_raw(raw: i32) -> Result<Self, SchemaError> {
        usize::try_from(raw)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(SchemaError::UnknownScalarTag { tag: raw })
    }

    /// Returns the raw serialized value.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self as i32
    }

    /// Returns the schema name of this type.
    #[must_use]
    pub const fn schema_name(self) -> &'static str {
        match self {
            Self::Undefined => "UNDEFINED",
            Self::Float => "FLOAT",
            Self::Uint8 => "UINT8",
            Self::Int8 => "INT8",
            Self::Uint16 => "UINT16",
            Self::Int16 => "INT16",
            Self::Int32 => "INT32",
            Self::Int64 => "INT64",
            Self::String => "STRING",
            Self::Bool => "BOOL",
            Self::Float16 => "FLOAT16",
            Self::Double => "DOUBLE",
            Self::Uint32 => "UINT32",
            Self::Uint64 => "UINT64",
            Self::Complex64 => "COMPLEX64",
            Self::Complex128 => "COMPLEX128",
            Self::Bfloat16 => "BFLOAT16",
        }
    }

    /// Returns true if this is a complex number type.
    #[must_use]
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::Complex64 | Self::Complex128)
    }
}

impl TryFrom<i32> for TensorDataType {
    type Error = SchemaError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

/// Decoded type descriptor for a graph value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeInfo {
    /// Tensor with the given element type.
    Tensor(TensorDataType),
    /// Map from a scalar key type to a nested type.
    Map {
        /// Key element type.
        key: TensorDataType,
        /// Value type.
        value: Box<TypeInfo>,
    },
    /// Sequence of a nested type.
    Sequence(Box<TypeInfo>),
}

impl TypeInfo {
    /// Creates a tensor type descriptor.
    #[must_use]
    pub const fn tensor(elem_type: TensorDataType) -> Self {
        Self::Tensor(elem_type)
    }

    /// Creates a map type descriptor.
    #[must_use]
    pub fn map(key: TensorDataType, value: Self) -> Self {
        Self::Map {
            key,
            value: Box::new(value),
        }
    }

    /// Creates a sequence type descriptor.
    #[must_use]
    pub fn sequence(elem: Self) -> Self {
        Self::Sequence(Box::new(elem))
    }

    /// Returns true if this is a tensor type.
    #[must_use]
    pub const fn is_tensor(&self) -> bool {
        matches!(self, Self::Tensor(_))
    }

    /// Returns true if this is a map type.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map { .. })
    }

    /// Returns true if this is a sequence type.
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns the descriptor with any sequence wrappers removed.
    #[must_use]
    pub fn innermost(&self) -> &Self {
        let mut current = self;
        while let Self::Sequence(elem) = current {
            current = elem;
        }
        current
    }
}
