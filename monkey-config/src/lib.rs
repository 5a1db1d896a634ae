//! Shared configuration loader for the Monkey workbench client.
//!
//! `defaults/monkey.default.toml` is embedded into every binary so that the
//! shipped routing table and runtime behavior stay in sync. Applications
//! layer user-specific files on top of those defaults via [`Loader`] before
//! deserializing into [`MonkeyConfig`], and [`MonkeyConfig::registry`]
//! materializes the validated, immutable [`ModeRegistry`] the pipeline runs
//! against.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use monkey_client::{EndpointAddress, ModeRegistry, ProcessingMode, UnknownModePolicy};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/monkey.default.toml");

/// Top-level configuration consumed by workbench applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MonkeyConfig {
    pub endpoints: EndpointsConfig,
    pub dispatch: DispatchConfig,
}

/// One endpoint URL per recognized processing mode.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointsConfig {
    pub lexer: String,
    pub flex_lexer: String,
    pub pratt: String,
    pub evaluator: String,
    pub bytecode: String,
}

impl EndpointsConfig {
    /// The configured address for a recognized mode.
    pub fn address_for(&self, mode: ProcessingMode) -> &str {
        match mode {
            ProcessingMode::Lexer => &self.lexer,
            ProcessingMode::FlexLexer => &self.flex_lexer,
            ProcessingMode::Pratt => &self.pratt,
            ProcessingMode::Evaluator => &self.evaluator,
            ProcessingMode::Bytecode => &self.bytecode,
        }
    }
}

/// How unrecognized mode identifiers are dispatched.
#[derive(Debug, Clone, Deserialize)]
pub struct DispatchConfig {
    pub unknown_mode_policy: UnknownModeSetting,
    pub fallback_mode: String,
}

/// Configuration-file spelling of [`UnknownModePolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownModeSetting {
    Reject,
    Fallback,
}

impl MonkeyConfig {
    /// Validate every endpoint and build the immutable routing table.
    ///
    /// Fails if any endpoint is not a parseable URL or the fallback mode is
    /// not a recognized identifier.
    pub fn registry(&self) -> Result<ModeRegistry, ConfigError> {
        let mut routes = HashMap::new();
        for mode in ProcessingMode::ALL {
            let raw = self.endpoints.address_for(mode);
            let endpoint = EndpointAddress::parse(raw).map_err(|err| {
                ConfigError::Message(format!("invalid endpoint for '{}': {}", mode, err))
            })?;
            routes.insert(mode, endpoint);
        }

        let fallback_mode = ProcessingMode::from_identifier(&self.dispatch.fallback_mode)
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "unknown fallback mode '{}'",
                    self.dispatch.fallback_mode
                ))
            })?;
        let fallback = routes
            .get(&fallback_mode)
            .cloned()
            .ok_or_else(|| ConfigError::Message("fallback endpoint missing".to_string()))?;

        let policy = match self.dispatch.unknown_mode_policy {
            UnknownModeSetting::Reject => UnknownModePolicy::Reject,
            UnknownModeSetting::Fallback => UnknownModePolicy::Fallback,
        };

        Ok(ModeRegistry::new(routes, fallback, policy))
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
    pub fn build(self) -> Result<MonkeyConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MonkeyConfig, ConfigError> {
    Loader::new().build()
}
