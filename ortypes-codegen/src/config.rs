//! Formatter configuration.

use serde::{Deserialize, Serialize};

/// Default template name written before `<K,V>` for map types.
pub const DEFAULT_MAP_TEMPLATE: &str = "map";

/// Controls how composite type descriptors are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Template name for map types.
    pub map_template: String,
    /// Template name for sequence types. `None` renders the element type
    /// without a wrapper.
    pub sequence_template: Option<String>,
    /// Fail instead of emitting a "not supported" placeholder.
    pub reject_unsupported: bool,
}

impl FormatterConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map_template: DEFAULT_MAP_TEMPLATE.to_string(),
            sequence_template: None,
            reject_unsupported: false,
        }
    }

    /// Sets the map template name.
    #[must_use]
    pub fn map_template(mut self, template: impl Into<String>) -> Self {
        self.map_template = template.into();
        self
    }

    /// Wraps sequence element types in the given template.
    #[must_use]
    pub fn sequence_template(mut self, template: impl Into<String>) -> Self {
        self.sequence_template = Some(template.into());
        self
    }

    /// Renders sequences as their element type.
    #[must_use]
    pub fn unwrap_sequences(mut self) -> Self {
        self.sequence_template = None;
        self
    }

    /// Sets whether complex element types are rejected.
    #[must_use]
    pub fn reject_unsupported(mut self, reject: bool) -> Self {
        self.reject_unsupported = reject;
        self
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::new()
    }
}
