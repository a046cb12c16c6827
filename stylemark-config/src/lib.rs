//! Shared configuration loader for the stylemark toolchain.
//!
//! `defaults/stylemark.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`StylemarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use stylemark_babel::model::attributes::MAX_STYLE_CODE;
use stylemark_babel::options::{CodecOptions, DecodeOptions, EncodeOptions, ExtractOptions};

const DEFAULT_TOML: &str = include_str!("../defaults/stylemark.default.toml");

/// Top-level configuration consumed by stylemark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct StylemarkConfig {
    pub extract: ExtractOptions,
    pub encode: EncodeOptions,
    pub decode: DecodeOptions,
    pub codes: CodesConfig,
}

/// Legacy integer code settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CodesConfig {
    pub newline_sentinel: u8,
}

impl From<&StylemarkConfig> for CodecOptions {
    fn from(config: &StylemarkConfig) -> Self {
        CodecOptions {
            extract: config.extract,
            encode: config.encode,
            decode: config.decode,
            newline_sentinel: config.codes.newline_sentinel,
        }
    }
}

impl From<StylemarkConfig> for CodecOptions {
    fn from(config: StylemarkConfig) -> Self {
        CodecOptions::from(&config)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<StylemarkConfig, ConfigError> {
        let config: StylemarkConfig = self.builder.build()?.try_deserialize()?;
        validate(&config)?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<StylemarkConfig, ConfigError> {
    Loader::new().build()
}

fn validate(config: &StylemarkConfig) -> Result<(), ConfigError> {
    let sentinel = config.codes.newline_sentinel;
    if sentinel <= MAX_STYLE_CODE {
        return Err(ConfigError::Message(format!(
            "codes.newline_sentinel must be above {MAX_STYLE_CODE}, got {sentinel}"
        )));
    }
    Ok(())
}
