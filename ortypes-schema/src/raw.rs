//! Wire-shaped type descriptors.
//!
//! The flatbuffer layer exposes a `TypeInfo` table as a union tag plus an
//! untyped payload table. These structs carry exactly that shape so the tag
//! can be validated before the payload is interpreted.

use crate::error::SchemaError;
use crate::types::{TensorDataType, TypeInfo};

/// `TypeInfoValue` union tag values.
pub mod value_type {
    /// No value set.
    pub const NONE: u8 = 0;
    /// `TensorTypeAndShape` payload.
    pub const TENSOR_TYPE: u8 = 1;
    /// `SequenceType` payload.
    pub const SEQUENCE_TYPE: u8 = 2;
    /// `MapType` payload.
    pub const MAP_TYPE: u8 = 3;
}

/// Payload table of a raw type info.
///
/// Scalar fields default to zero as in the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// `elem_type` of a tensor payload.
    pub elem_type: i32,
    /// `key_type` of a map payload.
    pub key_type: i32,
    /// `value_type` of a map or `elem_type` of a sequence payload.
    pub nested: Option<Box<RawTypeInfo>>,
}

/// Undecoded type info as read from a model buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTypeInfo {
    /// Union tag.
    pub value_type: u8,
    /// Union payload.
    pub value: RawTable,
}

impl RawTypeInfo {
    /// Creates a raw tensor type info.
    #[must_use]
    pub fn tensor(elem_type: i32) -> Self {
        Self {
            value_type: value_type::TENSOR_TYPE,
            value: RawTable {
                elem_type,
                ..RawTable::default()
            },
        }
    }

    /// Creates a raw map type info.
    #[must_use]
    pub fn map(key_type: i32, value: Self) -> Self {
        Self {
            value_type: value_type::MAP_TYPE,
            value: RawTable {
                key_type,
                nested: Some(Box::new(value)),
                ..RawTable::default()
            },
        }
    }

    /// Creates a raw sequence type info.
    #[must_use]
    pub fn sequence(elem: Self) -> Self {
        Self {
            value_type: value_type::SEQUENCE_TYPE,
            value: RawTable {
                nested: Some(Box::new(elem)),
                ..RawTable::default()
            },
        }
    }

    /// Decodes into a typed descriptor.
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownDescriptorShape` for an unknown union tag,
    /// `SchemaError::UnknownScalarTag` for an undefined element type and
    /// `SchemaError::MissingField` if a nested table is absent.
    pub fn decode(&self) -> Result<TypeInfo, SchemaError> {
        match self.value_type {
            value_type::TENSOR_TYPE => Ok(TypeInfo::Tensor(TensorDataType::from_raw(
                self.value.elem_type,
            )?)),
            value_type::MAP_TYPE => {
                let key = TensorDataType::from_raw(self.value.key_type)?;
                let value = self
                    .value
                    .nested
                    .as_deref()
                    .ok_or(SchemaError::missing_field("MapType", "value_type"))?
                    .decode()?;
                Ok(TypeInfo::map(key, value))
            }
            value_type::SEQUENCE_TYPE => {
                let elem = self
                    .value
                    .nested
                    .as_deref()
                    .ok_or(SchemaError::missing_field("SequenceType", "elem_type"))?
                    .decode()?;
                Ok(TypeInfo::sequence(elem))
            }
            other => Err(SchemaError::UnknownDescriptorShape { value_type: other }),
        }
    }
}

impl TryFrom<&RawTypeInfo> for TypeInfo {
    type Error = SchemaError;

    fn try_from(raw: &RawTypeInfo) -> Result<Self, Self::Error> {
        raw.decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_tensor() {
        let raw = RawTypeInfo::tensor(TensorDataType::Int32.raw());
        assert_eq!(raw.decode(), Ok(TypeInfo::tensor(TensorDataType::Int32)));
    }

    #[test]
    fn test_decode_nested() {
        let raw = RawTypeInfo::sequence(RawTypeInfo::map(
            TensorDataType::Int64.raw(),
            RawTypeInfo::tensor(TensorDataType::Float.raw()),
        ));
        let expected = TypeInfo::sequence(TypeInfo::map(
            TensorDataType::Int64,
            TypeInfo::tensor(TensorDataType::Float),
        ));
        assert_eq!(TypeInfo::try_from(&raw), Ok(expected));
    }

    #[test]
    fn test_decode_none_shape() {
        let raw = RawTypeInfo::default();
        assert_eq!(
            raw.decode(),
            Err(SchemaError::UnknownDescriptorShape {
                value_type: value_type::NONE
            })
        );
    }

    #[test]
    fn test_decode_unknown_shape() {
        let raw = RawTypeInfo {
            value_type: 7,
            value: RawTable::default(),
        };
        assert_eq!(
            raw.decode(),
            Err(SchemaError::UnknownDescriptorShape { value_type: 7 })
        );
    }

    #[test]
    fn test_decode_unknown_elem_type() {
        let raw = RawTypeInfo::map(42, RawTypeInfo::tensor(1));
        assert_eq!(raw.decode(), Err(SchemaError::UnknownScalarTag { tag: 42 }));
    }

    #[test]
    fn test_decode_missing_nested() {
        let raw = RawTypeInfo {
            value_type: value_type::SEQUENCE_TYPE,
            value: RawTable::default(),
        };
        assert_eq!(
            raw.decode(),
            Err(SchemaError::missing_field("SequenceType", "elem_type"))
        );
    }

    #[test]
    fn test_default_elem_type_is_undefined() {
        let raw = RawTypeInfo {
            value_type: value_type::TENSOR_TYPE,
            value: RawTable::default(),
        };
        assert_eq!(
            raw.decode(),
            Ok(TypeInfo::tensor(TensorDataType::Undefined))
        );
    }
}
