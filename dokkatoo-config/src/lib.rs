//! Shared configuration loader for the dokkatoo text tools.
//!
//! `defaults/dokkatoo.default.toml` is compiled in, so the documented defaults and the ones
//! used at runtime cannot drift apart. Callers stack user files and single-key overrides with
//! [`Loader`], then deserialize into [`DokkatooConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use dokkatoo_text::ParserOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/dokkatoo.default.toml");

/// File name picked up from the working directory when present.
pub const PROJECT_CONFIG_FILE: &str = "dokkatoo.toml";

/// Everything the dokkatoo tools can be configured with.
#[derive(Debug, Clone, Deserialize)]
pub struct DokkatooConfig {
    pub parser: ParserOptions,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl DokkatooConfig {
    /// Options for [`dokkatoo_text::TextParser::new`].
    pub fn parser_options(&self) -> ParserOptions {
        self.parser
    }
}

/// How fragments are printed.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Tag,
    Json,
    DocJson,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

/// Layers configuration sources, lowest priority first.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only the compiled-in defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Stack a TOML file on top; `build` fails if it does not exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Stack a TOML file on top when it exists, e.g. a project-local `dokkatoo.toml`.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `output.format` from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every source and deserialize the result.
    pub fn build(self) -> Result<DokkatooConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The compiled-in defaults on their own.
pub fn load_defaults() -> Result<DokkatooConfig, ConfigError> {
    Loader::new().build()
}
