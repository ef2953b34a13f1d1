//! Configuration loading
//!
//! The commented `defaults/ssf.default.toml` is compiled in and always forms the
//! bottom layer, so every key has a value. A `--config` file and command-line
//! flags go on top.

use crate::ssf::parsing::CorpusMode;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/ssf.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SsfConfig {
    pub corpus: CorpusConfig,
    pub output: OutputConfig,
}

/// Controls how a corpus is read from disk
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    pub mode: CorpusMode,
    /// Extensions (without the dot) of files to read; empty reads every file
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub include_hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

/// Builds an [`SsfConfig`] from the embedded defaults plus any number of layers
///
/// Layers apply in the order they are added; later layers win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Add a TOML file that must exist
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), true)
    }

    /// Add a TOML file that is skipped when absent
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), false)
    }

    /// Set one dotted key, e.g. `corpus.mode`, above every file layer
    pub fn set_override<I>(self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        let builder = self.builder.set_override(key, value)?;
        Ok(Self { builder })
    }

    pub fn build(self) -> Result<SsfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer_file(self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        Self {
            builder: self.builder.add_source(source),
        }
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults, with nothing layered on top
pub fn load_defaults() -> Result<SsfConfig, ConfigError> {
    Loader::new().build()
}
