//! Value name to type descriptor lookup.

use crate::error::SchemaError;
use crate::types::TypeInfo;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Source of type descriptors keyed by value name.
pub trait TypeInfoLookup {
    /// Returns the descriptor for `name`, if present.
    fn lookup(&self, name: &str) -> Option<&TypeInfo>;

    /// Returns the descriptor for `name`.
    ///
    /// # Errors
    /// Returns `SchemaError::MissingValueEntry` if `name` is not present.
    fn get_type_info(&self, name: &str) -> Result<&TypeInfo, SchemaError> {
        self.lookup(name).ok_or_else(|| SchemaError::missing_entry(name))
    }
}

impl<S: std::hash::BuildHasher> TypeInfoLookup for HashMap<String, TypeInfo, S> {
    fn lookup(&self, name: &str) -> Option<&TypeInfo> {
        self.get(name)
    }
}

impl TypeInfoLookup for BTreeMap<String, TypeInfo> {
    fn lookup(&self, name: &str) -> Option<&TypeInfo> {
        self.get(name)
    }
}

/// Registry of graph value names and their type descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueRegistry {
    values: BTreeMap<String, TypeInfo>,
}

impl ValueRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a value.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateValue` if `name` is already registered.
    pub fn insert(&mut self, name: impl Into<String>, info: TypeInfo) -> Result<(), SchemaError> {
        let name = name.into();
        if self.values.contains_key(&name) {
            return Err(SchemaError::duplicate(name));
        }
        self.values.insert(name, info);
        Ok(())
    }

    /// Builds a registry from `(name, info)` pairs.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateValue` on the first repeated name.
    pub fn from_entries<I, N>(entries: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (N, TypeInfo)>,
        N: Into<String>,
    {
        let mut registry = Self::new();
        for (name, info) in entries {
            registry.insert(name, info)?;
        }
        Ok(registry)
    }

    /// Returns true if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the number of registered values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no values are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over registered values in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeInfo)> {
        self.values.iter().map(|(name, info)| (name.as_str(), info))
    }
}

impl TypeInfoLookup for ValueRegistry {
    fn lookup(&self, name: &str) -> Option<&TypeInfo> {
        self.values.get(name)
    }
}
