//! Layered configuration assembly.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::path::PathBuf;

/// Builds a [`Config`] from file, environment and programmatic layers.
///
/// # Examples
///
/// ```
/// use playconv::config::{Config, ConfigBuilder};
/// use playconv::PathFormat;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         source_format: Some(PathFormat::Windows),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.effective_source_format(), PathFormat::Windows);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Start with every layer enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this file instead of `~/.playconv/config.yaml`.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `PLAYCONV_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` over every other layer.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Load, merge and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded, an environment variable
    /// is invalid, or the merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut layers = Vec::new();

        if !self.skip_files {
            if let Some(source) = ConfigLoader::load(self.config_file.as_deref())? {
                log::debug!("loaded configuration from {}", source.path.display());
                layers.push(source.config);
            }
        }

        if !self.skip_env {
            let mut env_layer = Config::default();
            EnvironmentConfig::apply_overrides(&mut env_layer)?;
            layers.push(env_layer);
        }

        if let Some(overrides) = self.overrides {
            layers.push(overrides);
        }

        let config = ConfigMerger::merge(layers);
        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
