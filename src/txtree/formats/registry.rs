//! Format registry for forest serialization
//!
//! Each output format implements the `Formatter` trait and can be registered with
//! `FormatRegistry`. The CLI looks formats up by the name given to `--format`.

use super::text::{serialize_with, TextOptions};
use super::treeviz::to_treeviz_str;
use crate::txtree::ast::{Forest, NodeKind};
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for forest formatters
pub trait Formatter<K: NodeKind>: Send + Sync {
    /// The name of this format (e.g., "txtree", "json")
    fn name(&self) -> &str;

    fn serialize(&self, forest: &Forest<K>) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// The line format itself
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter {
    pub options: TextOptions,
}

impl<K: NodeKind> Formatter<K> for TextFormatter {
    fn name(&self) -> &str {
        "txtree"
    }

    fn serialize(&self, forest: &Forest<K>) -> Result<String, FormatError> {
        Ok(serialize_with(forest, self.options))
    }

    fn description(&self) -> &str {
        "Indented txtree text"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl<K: NodeKind> Formatter<K> for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, forest: &Forest<K>) -> Result<String, FormatError> {
        serde_json::to_string_pretty(forest)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "Nested JSON objects"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormatter;

impl<K: NodeKind> Formatter<K> for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, forest: &Forest<K>) -> Result<String, FormatError> {
        serde_yaml::to_string(forest).map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "Nested YAML mappings"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TreevizFormatter;

impl<K: NodeKind> Formatter<K> for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, forest: &Forest<K>) -> Result<String, FormatError> {
        Ok(to_treeviz_str(forest))
    }

    fn description(&self) -> &str {
        "Box-drawn tree for terminals"
    }
}

/// Registry of forest formatters, keyed by name
pub struct FormatRegistry<K: NodeKind> {
    formatters: HashMap<String, Box<dyn Formatter<K>>>,
}

impl<K: NodeKind + 'static> FormatRegistry<K> {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter<K> + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter<K>> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a forest using the specified format
    pub fn serialize(&self, forest: &Forest<K>, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(forest)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Registry with the built-in formats, printing txtree text with `text` options
    pub fn with_text_options(text: TextOptions) -> Self {
        let mut registry = Self::new();
        registry.register(TextFormatter { options: text });
        registry.register(JsonFormatter);
        registry.register(YamlFormatter);
        registry.register(TreevizFormatter);
        registry
    }

    pub fn with_defaults() -> Self {
        Self::with_text_options(TextOptions::default())
    }
}

impl<K: NodeKind + 'static> Default for FormatRegistry<K> {
    fn default() -> Self {
        Self::with_defaults()
    }
}
