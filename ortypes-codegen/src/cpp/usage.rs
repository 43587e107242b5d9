//! Per-operator type usage collection.
//!
//! Records which C++ element types flow through each input and output index
//! of an operator, for configuring builds that only register kernels for the
//! types a set of models actually uses.

use crate::cpp::types::TypeFormatter;
use crate::error::CodegenError;
use ortypes_schema::TypeInfoLookup;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Type strings recorded per input and output index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OperatorTypeUsage {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    inputs: BTreeMap<usize, BTreeSet<String>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    outputs: BTreeMap<usize, BTreeSet<String>>,
}

impl OperatorTypeUsage {
    /// Creates an empty usage record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the type of `value_name` for input `index`.
    ///
    /// # Errors
    /// Returns `CodegenError` if the value is missing or its type cannot be
    /// generated, including complex element types.
    pub fn record_input<L>(
        &mut self,
        formatter: &TypeFormatter,
        index: usize,
        value_name: &str,
        lookup: &L,
    ) -> Result<(), CodegenError>
    where
        L: TypeInfoLookup + ?Sized,
    {
        let type_str = formatter.value_name_to_type_str_checked(value_name, lookup)?;
        self.inputs.entry(index).or_default().insert(type_str);
        Ok(())
    }

    /// Records the type of `value_name` for output `index`.
    ///
    /// # Errors
    /// Returns `CodegenError` if the value is missing or its type cannot be
    /// generated, including complex element types.
    pub fn record_output<L>(
        &mut self,
        formatter: &TypeFormatter,
        index: usize,
        value_name: &str,
        lookup: &L,
    ) -> Result<(), CodegenError>
    where
        L: TypeInfoLookup + ?Sized,
    {
        let type_str = formatter.value_name_to_type_str_checked(value_name, lookup)?;
        self.outputs.entry(index).or_default().insert(type_str);
        Ok(())
    }

    /// Iterates over the types recorded for input `index` in sorted order.
    pub fn input_types(&self, index: usize) -> impl Iterator<Item = &str> {
        self.inputs
            .get(&index)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Iterates over the types recorded for output `index` in sorted order.
    pub fn output_types(&self, index: usize) -> impl Iterator<Item = &str> {
        self.outputs
            .get(&index)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty()
    }

    /// Adds all types recorded in `other`.
    pub fn merge(&mut self, other: &Self) {
        for (index, types) in &other.inputs {
            self.inputs
                .entry(*index)
                .or_default()
                .extend(types.iter().cloned());
        }
        for (index, types) in &other.outputs {
            self.outputs
                .entry(*index)
                .or_default()
                .extend(types.iter().cloned());
        }
    }

    /// Serializes the record as a compact JSON object.
    ///
    /// # Errors
    /// Returns `CodegenError::Serialization` if serialization fails.
    pub fn to_config_string(&self) -> Result<String, CodegenError> {
        Ok(serde_json::to_string(self)?)
    }
}
