//! Output format lookup
//!
//! Formats are chosen by name at runtime (`--format treeviz`), so each one is a
//! boxed [`Formatter`] held in a [`FormatRegistry`].

use crate::ssf::ast::Corpus;
use std::collections::BTreeMap;
use std::fmt;

/// Failure to produce an output format
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No formatter registered under this name
    FormatNotFound(String),
    /// The formatter itself failed
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "unknown format '{}'", name),
            FormatError::SerializationError(msg) => write!(f, "could not serialize corpus: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

/// One output format
pub trait Formatter: Send + Sync {
    /// Lookup key, e.g. `"treeviz"`
    fn name(&self) -> &str;

    fn serialize(&self, corpus: &Corpus) -> Result<String, FormatError>;

    /// One-line summary shown by `--list-formats`
    fn description(&self) -> &str {
        ""
    }
}

/// Formatters keyed by name, iterated in name order
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// An empty registry; see [`FormatRegistry::with_defaults`] for the built-ins
    pub fn new() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// Add `formatter`, replacing any earlier one under the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(Box::as_ref)
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render `corpus` with the formatter registered as `format`
    pub fn serialize(&self, corpus: &Corpus, format: &str) -> Result<String, FormatError> {
        match self.get(format) {
            Some(formatter) => formatter.serialize(corpus),
            None => Err(FormatError::FormatNotFound(format.to_string())),
        }
    }

    /// Registered names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }

    /// `(name, description)` pairs, sorted by name
    pub fn formats(&self) -> impl Iterator<Item = (&str, &str)> {
        self.formatters
            .iter()
            .map(|(name, formatter)| (name.as_str(), formatter.description()))
    }

    /// A registry holding every built-in format
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::TextFormatter);
        registry.register(super::SummaryFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::SsfFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
