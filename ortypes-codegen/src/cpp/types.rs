//! C++ type name generation.

use crate::config::FormatterConfig;
use crate::cpp::scalars::scalar_type_name;
use crate::error::CodegenError;
use ortypes_schema::{RawTypeInfo, TensorDataType, TypeInfo, TypeInfoLookup};

/// Converts type descriptors into C++ type names.
#[derive(Debug, Clone, Default)]
pub struct TypeFormatter {
    config: FormatterConfig,
}

impl TypeFormatter {
    /// Creates a formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter with the given configuration.
    #[must_use]
    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Returns the C++ type name for a tensor element type.
    ///
    /// Complex types yield a "not supported" placeholder unless the
    /// configuration rejects them.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownScalarTag` if the type has no table
    /// entry, or `CodegenError::UnsupportedScalarType` for complex types when
    /// `reject_unsupported` is set.
    pub fn format_scalar(&self, tag: TensorDataType) -> Result<&'static str, CodegenError> {
        self.scalar(tag, self.config.reject_unsupported)
    }

    /// Decodes a raw element type value and returns its C++ type name.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if the value is not a defined element
    /// type, otherwise as [`format_scalar`](Self::format_scalar).
    pub fn format_raw_scalar(&self, raw: i32) -> Result<&'static str, CodegenError> {
        self.format_scalar(TensorDataType::from_raw(raw)?)
    }

    /// Returns the C++ type name for a type descriptor.
    ///
    /// Maps render as `map<K,V>`. Sequences render as their element type
    /// unless a sequence template is configured.
    ///
    /// # Errors
    /// Returns `CodegenError` if any element type cannot be formatted.
    pub fn format_type_info(&self, info: &TypeInfo) -> Result<String, CodegenError> {
        let mut output = String::new();
        self.write_type_info(info, self.config.reject_unsupported, &mut output)?;
        Ok(output)
    }

    /// Like [`format_type_info`](Self::format_type_info) but always rejects
    /// complex element types.
    ///
    /// # Errors
    /// Returns `CodegenError::UnsupportedScalarType` if a complex element
    /// type appears anywhere in the descriptor.
    pub fn format_checked(&self, info: &TypeInfo) -> Result<String, CodegenError> {
        let mut output = String::new();
        self.write_type_info(info, true, &mut output)?;
        Ok(output)
    }

    /// Decodes a raw descriptor and returns its C++ type name.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if decoding fails, otherwise as
    /// [`format_type_info`](Self::format_type_info).
    pub fn format_raw_type_info(&self, raw: &RawTypeInfo) -> Result<String, CodegenError> {
        self.format_type_info(&raw.decode()?)
    }

    /// Looks up a value name and returns the C++ type name of its descriptor.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` wrapping `MissingValueEntry` if the
    /// name is absent, otherwise as [`format_type_info`](Self::format_type_info).
    pub fn value_name_to_type_str<L>(
        &self,
        name: &str,
        lookup: &L,
    ) -> Result<String, CodegenError>
    where
        L: TypeInfoLookup + ?Sized,
    {
        let info = lookup.get_type_info(name)?;
        let type_str = self.format_type_info(info)?;
        tracing::debug!("Resolved value '{}' to '{}'", name, type_str);
        Ok(type_str)
    }

    /// Like [`value_name_to_type_str`](Self::value_name_to_type_str) but
    /// always rejects complex element types.
    ///
    /// # Errors
    /// Returns `CodegenError` if the name is absent or the descriptor
    /// contains a complex element type.
    pub fn value_name_to_type_str_checked<L>(
        &self,
        name: &str,
        lookup: &L,
    ) -> Result<String, CodegenError>
    where
        L: TypeInfoLookup + ?Sized,
    {
        let info = lookup.get_type_info(name)?;
        self.format_checked(info)
    }

    fn scalar(&self, tag: TensorDataType, strict: bool) -> Result<&'static str, CodegenError> {
        if tag.is_complex() {
            if strict {
                return Err(CodegenError::UnsupportedScalarType { tag });
            }
            tracing::warn!("Emitting placeholder for unsupported type {:?}", tag);
        }
        scalar_type_name(tag).ok_or(CodegenError::UnknownScalarTag { tag: tag.raw() })
    }

    fn write_type_info(
        &self,
        info: &TypeInfo,
        strict: bool,
        output: &mut String,
    ) -> Result<(), CodegenError> {
        match info {
            TypeInfo::Tensor(elem_type) => {
                output.push_str(self.scalar(*elem_type, strict)?);
            }
            TypeInfo::Map { key, value } => {
                let key_str = self.scalar(*key, strict)?;
                output.push_str(&self.config.map_template);
                output.push('<');
                output.push_str(key_str);
                output.push(',');
                self.write_type_info(value, strict, output)?;
                output.push('>');
            }
            TypeInfo::Sequence(elem) => match &self.config.sequence_template {
                // The element type is what the runtime container holds; whether
                // a value is a sequence is tracked separately by the consumer.
                None => self.write_type_info(elem, strict, output)?,
                Some(template) => {
                    output.push_str(template);
                    output.push('<');
                    self.write_type_info(elem, strict, output)?;
                    output.push('>');
                }
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpp::scalars::{COMPLEX64_UNSUPPORTED, COMPLEX128_UNSUPPORTED};
    use ortypes_schema::{SchemaError, ValueRegistry};
    use std::collections::HashMap;

    #[test]
    fn test_format_scalar_table() {
        let formatter = TypeFormatter::new();
        let expected = [
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
            (TensorDataType::Bfloat16, "BFloat16"),
        ];
        for (tag, name) in expected {
            assert_eq!(formatter.format_scalar(tag).unwrap(), name);
        }
    }

    #[test]
    fn test_format_scalar_complex_placeholder() {
        let formatter = TypeFormatter::new();
        assert_eq!(
            formatter.format_scalar(TensorDataType::Complex64).unwrap(),
            COMPLEX64_UNSUPPORTED
        );
        assert_eq!(
            formatter.format_scalar(TensorDataType::Complex128).unwrap(),
            COMPLEX128_UNSUPPORTED
        );
    }

    #[test]
    fn test_format_scalar_unknown_tag() {
        let formatter = TypeFormatter::new();
        assert!(matches!(
            formatter.format_scalar(TensorDataType::Undefined),
            Err(CodegenError::UnknownScalarTag { tag: 0 })
        ));
        assert!(matches!(
            formatter.format_raw_scalar(99),
            Err(CodegenError::Schema(SchemaError::UnknownScalarTag { tag: 99 }))
        ));
        assert_eq!(formatter.format_raw_scalar(11).unwrap(), "double");
    }

    #[test]
    fn test_format_map() {
        let formatter = TypeFormatter::new();
        let info = TypeInfo::map(
            TensorDataType::Int32,
            TypeInfo::tensor(TensorDataType::Float),
        );
        assert_eq!(formatter.format_type_info(&info).unwrap(), "map<int32_t,float>");
    }

    #[test]
    fn test_format_sequence_unwrapped() {
        let formatter = TypeFormatter::new();
        let info = TypeInfo::sequence(TypeInfo::tensor(TensorDataType::Double));
        assert_eq!(formatter.format_type_info(&info).unwrap(), "double");
    }

    #[test]
    fn test_format_sequence_of_map() {
        let formatter = TypeFormatter::new();
        let info = TypeInfo::sequence(TypeInfo::map(
            TensorDataType::Uint8,
            TypeInfo::tensor(TensorDataType::Bool),
        ));
        assert_eq!(formatter.format_type_info(&info).unwrap(), "map<uint8_t,bool>");
    }

    #[test]
    fn test_format_nested_map() {
        let formatter = TypeFormatter::new();
        let info = TypeInfo::map(
            TensorDataType::String,
            TypeInfo::map(TensorDataType::Int64, TypeInfo::tensor(TensorDataType::Float)),
        );
        assert_eq!(
            formatter.format_type_info(&info).unwrap(),
            "map<std::string,map<int64_t,float>>"
        );
    }

    #[test]
    fn test_format_with_templates() {
        let config = FormatterConfig::new()
            .map_template("std::map")
            .sequence_template("std::vector");
        let formatter = TypeFormatter::with_config(config);
        let info = TypeInfo::sequence(TypeInfo::map(
            TensorDataType::Int64,
            TypeInfo::tensor(TensorDataType::Float),
        ));
        assert_eq!(
            formatter.format_type_info(&info).unwrap(),
            "std::vector<std::map<int64_t,float>>"
        );
    }

    #[test]
    fn test_format_map_with_complex_value() {
        let formatter = TypeFormatter::new();
        let info = TypeInfo::map(
            TensorDataType::Int64,
            TypeInfo::tensor(TensorDataType::Complex64),
        );
        assert_eq!(
            formatter.format_type_info(&info).unwrap(),
            "map<int64_t,complex64 is not supported>"
        );
        assert!(matches!(
            formatter.format_checked(&info),
            Err(CodegenError::UnsupportedScalarType {
                tag: TensorDataType::Complex64
            })
        ));
    }

    #[test]
    fn test_reject_unsupported_config() {
        let formatter = TypeFormatter::with_config(FormatterConfig::new().reject_unsupported(true));
        assert!(matches!(
            formatter.format_scalar(TensorDataType::Complex128),
            Err(CodegenError::UnsupportedScalarType { .. })
        ));
        assert_eq!(formatter.format_scalar(TensorDataType::Int8).unwrap(), "int8_t");
    }

    #[test]
    fn test_format_raw_type_info() {
        let formatter = TypeFormatter::new();
        let raw = RawTypeInfo::map(6, RawTypeInfo::tensor(1));
        assert_eq!(formatter.format_raw_type_info(&raw).unwrap(), "map<int32_t,float>");

        let unknown = RawTypeInfo::default();
        assert!(matches!(
            formatter.format_raw_type_info(&unknown),
            Err(CodegenError::Schema(SchemaError::UnknownDescriptorShape {
                value_type: 0
            }))
        ));
    }

    #[test]
    fn test_value_name_missing() {
        let formatter = TypeFormatter::new();
        let registry = ValueRegistry::new();
        assert!(matches!(
            formatter.value_name_to_type_str("x", &registry),
            Err(CodegenError::Schema(SchemaError::MissingValueEntry { ref name })) if name == "x"
        ));
    }

    #[test]
    fn test_value_name_found() {
        let formatter = TypeFormatter::new();
        let mut registry = HashMap::new();
        registry.insert("x".to_string(), TypeInfo::tensor(TensorDataType::String));
        assert_eq!(
            formatter.value_name_to_type_str("x", &registry).unwrap(),
            "std::string"
        );
    }

    #[test]
    fn test_value_name_checked() {
        let formatter = TypeFormatter::new();
        let registry = ValueRegistry::from_entries([
            ("z", TypeInfo::tensor(TensorDataType::Complex128)),
            ("y", TypeInfo::tensor(TensorDataType::Uint16)),
        ])
        .unwrap();
        assert!(formatter.value_name_to_type_str_checked("z", &registry).is_err());
        assert_eq!(
            formatter.value_name_to_type_str_checked("y", &registry).unwrap(),
            "uint16_t"
        );
    }
}
