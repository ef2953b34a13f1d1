//! JSON and YAML formatters, straight from the serde representation of the tree

use super::registry::{FormatError, Formatter};
use crate::ssf::ast::Corpus;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, corpus: &Corpus) -> Result<String, FormatError> {
        serde_json::to_string_pretty(corpus)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Full tree as JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, corpus: &Corpus) -> Result<String, FormatError> {
        serde_yaml::to_string(corpus).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Full tree as YAML"
    }
}
