//! Error types for schema decoding and value lookup.

use thiserror::Error;

/// Error type for schema decoding and registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Tensor element type value not defined by the schema.
    #[error("unknown tensor data type tag {tag}")]
    UnknownScalarTag {
        /// Raw tag value.
        tag: i32,
    },

    /// Type info union tag that is none of tensor, map or sequence.
    #[error("unknown or missing value type of {value_type}")]
    UnknownDescriptorShape {
        /// Raw union tag value.
        value_type: u8,
    },

    /// Required table field was absent.
    #[error("missing field '{field}' in table '{table}'")]
    MissingField {
        /// Table name.
        table: &'static str,
        /// Field name.
        field: &'static str,
    },

    /// Value name not present in the registry.
    #[error("missing TypeInfo entry for {name}")]
    MissingValueEntry {
        /// Value name.
        name: String,
    },

    /// Value name registered twice.
    #[error("duplicate TypeInfo entry for {name}")]
    DuplicateValue {
        /// Value name.
        name: String,
    },
}

impl SchemaError {
    /// Creates a missing value entry error.
    pub fn missing_entry(name: impl Into<String>) -> Self {
        Self::MissingValueEntry { name: name.into() }
    }

    /// Creates a duplicate value error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateValue { name: name.into() }
    }

    /// Creates a missing field error.
    #[must_use]
    pub const fn missing_field(table: &'static str, field: &'static str) -> Self {
        Self::MissingField { table, field }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SchemaError::missing_entry("X").to_string(),
            "missing TypeInfo entry for X"
        );
        assert_eq!(
            SchemaError::UnknownDescriptorShape { value_type: 0 }.to_string(),
            "unknown or missing value type of 0"
        );
        assert_eq!(
            SchemaError::UnknownScalarTag { tag: 99 }.to_string(),
            "unknown tensor data type tag 99"
        );
        assert_eq!(
            SchemaError::missing_field("MapType", "value_type").to_string(),
            "missing field 'value_type' in table 'MapType'"
        );
    }
}
