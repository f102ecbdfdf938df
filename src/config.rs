//! Configuration management for path argument validation
//!
//! Loads validator settings from a config file with `FILE_TOOL_*`
//! environment overrides.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::storage::validation::INPUT_SEPARATORS;

/// Validator settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ValidatorConfig {
    /// Zero-based positions of the arguments treated as paths
    #[serde(default = "default_path_args")]
    pub path_args: Vec<usize>,

    /// Characters rejected on top of the built-in `<>"|?*`
    #[serde(default)]
    pub extra_forbidden_chars: String,
}

fn default_path_args() -> Vec<usize> {
    vec![0]
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            path_args: default_path_args(),
            extra_forbidden_chars: String::new(),
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from `path` with environment overrides
    ///
    /// Environment: `FILE_TOOL_EXTRA_FORBIDDEN_CHARS`
    pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Like [`ValidatorConfig::load`], reading overrides from `env`
    /// instead of the process environment when it is given.
    pub fn load_with_env(
        path: &Path,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path))
            .add_source(
                Environment::with_prefix("FILE_TOOL")
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()?;

        let config: ValidatorConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if let Some(c) = self
            .extra_forbidden_chars
            .chars()
            .find(|c| INPUT_SEPARATORS.contains(c))
        {
            return Err(config::ConfigError::Message(format!(
                "extra_forbidden_chars cannot contain the path separator '{c}'"
            )));
        }

        if self.extra_forbidden_chars.contains(':') {
            return Err(config::ConfigError::Message(
                "extra_forbidden_chars cannot contain ':' (needed for drive prefixes)".into(),
            ));
        }

        Ok(())
    }
}
