//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-user configuration directory under `$HOME`.
pub const USER_CONFIG_DIR: &str = ".playconv";

/// File name of the configuration inside [`USER_CONFIG_DIR`].
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A loaded configuration file.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path the configuration was read from.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use playconv::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load(None).unwrap() {
///     println!("Loaded {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the configuration file.
    ///
    /// An explicit path must exist. The default user file
    /// (`~/.playconv/config.yaml`) is optional; `Ok(None)` means no file was
    /// found and defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, or if any file that
    /// exists cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Option<ConfigSource>> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::PathNotFound {
                    path: path.to_path_buf(),
                });
            }
            let config = Self::load_file(path)?;
            return Ok(Some(ConfigSource {
                path: path.to_path_buf(),
                config,
            }));
        }

        let Some(path) = Self::user_config_path() else {
            log::debug!("no home directory, skipping user configuration");
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let config = Self::load_file(&path)?;
        Ok(Some(ConfigSource { path, config }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// The default user configuration path, if a home directory is known.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join(CONFIG_FILE_NAME))
    }
}
