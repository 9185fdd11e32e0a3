//! Environment variable handling for configuration overrides.
//!
//! `PLAYCONV_*` variables override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::format::{parse_format_list, PathFormat};
use std::env;
use std::path::PathBuf;

/// Overrides the source format.
pub const SOURCE_FORMAT_ENV: &str = "PLAYCONV_SOURCE_FORMAT";
/// Overrides the export formats (comma separated).
pub const TYPES_ENV: &str = "PLAYCONV_TYPES";
/// Overrides the source playlist location.
pub const PLAYLIST_DIR_ENV: &str = "PLAYCONV_PLAYLIST_DIR";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use playconv::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a format variable names an unknown format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(value) = Self::var(SOURCE_FORMAT_ENV) {
            let format: PathFormat = value.parse().map_err(|_| Error::Validation {
                field: SOURCE_FORMAT_ENV.into(),
                message: format!("Unknown path format: '{value}'"),
            })?;
            config.source_format = Some(format);
        }

        if let Some(value) = Self::var(TYPES_ENV) {
            let types = parse_format_list(&value).map_err(|e| Error::Validation {
                field: TYPES_ENV.into(),
                message: e.to_string(),
            })?;
            config.types = Some(types);
        }

        if let Some(value) = Self::var(PLAYLIST_DIR_ENV) {
            config.playlist_dir = Some(PathBuf::from(value));
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        env::remove_var(SOURCE_FORMAT_ENV);
        env::remove_var(TYPES_ENV);
        env::remove_var(PLAYLIST_DIR_ENV);
    }

    #[test]
    #[serial]
    fn test_overrides_applied() {
        clear();
        env::set_var(SOURCE_FORMAT_ENV, "ntfs");
        env::set_var(TYPES_ENV, "posix, uri-posix");
        env::set_var(PLAYLIST_DIR_ENV, "/lists");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        clear();

        assert_eq!(config.source_format, Some(PathFormat::Windows));
        assert_eq!(
            config.types,
            Some(vec![PathFormat::Posix, PathFormat::PosixUri])
        );
        assert_eq!(config.playlist_dir, Some(PathBuf::from("/lists")));
    }

    #[test]
    #[serial]
    fn test_invalid_format_rejected() {
        clear();
        env::set_var(SOURCE_FORMAT_ENV, "hfs");

        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear();

        assert!(matches!(result, Err(Error::Validation { field, .. }) if field == SOURCE_FORMAT_ENV));
    }

    #[test]
    #[serial]
    fn test_empty_values_ignored() {
        clear();
        env::set_var(TYPES_ENV, "  ");

        let mut config = Config {
            types: Some(vec![PathFormat::Windows]),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        clear();

        assert_eq!(config.types, Some(vec![PathFormat::Windows]));
    }
}
