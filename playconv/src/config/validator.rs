//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::mount::MountCorrelation;
use std::collections::HashSet;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use playconv::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref types) = config.types {
            if types.is_empty() {
                return Err(Error::Validation {
                    field: "types".into(),
                    message: "At least one format is required".into(),
                });
            }
            let mut seen = HashSet::new();
            if let Some(duplicate) = types.iter().find(|t| !seen.insert(**t)) {
                return Err(Error::Validation {
                    field: "types".into(),
                    message: format!("Format '{duplicate}' is listed twice"),
                });
            }
        }

        if let Some(ref dir) = config.playlist_dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "playlist_dir".into(),
                    message: "Path cannot be empty".into(),
                });
            }
        }

        if let Some(ref destinations) = config.destinations {
            if let Some((format, _)) = destinations.iter().find(|(_, p)| p.as_os_str().is_empty()) {
                return Err(Error::Validation {
                    field: format!("destinations.{format}"),
                    message: "Path cannot be empty".into(),
                });
            }
        }

        if let Some(ref mounts) = config.mounts {
            for (index, mount) in mounts.iter().enumerate() {
                Self::validate_mount(index, mount)?;
            }
        }

        Ok(())
    }

    /// A mount needs an absolute POSIX mountpoint and a non-empty source.
    fn validate_mount(index: usize, mount: &MountCorrelation) -> Result<()> {
        if !mount.posix_mountpoint.starts_with('/') {
            return Err(Error::Validation {
                field: format!("mounts[{index}].mountpoint"),
                message: format!(
                    "Mountpoint must be an absolute path, got '{}'",
                    mount.posix_mountpoint
                ),
            });
        }
        if mount.windows_source.trim().is_empty() {
            return Err(Error::Validation {
                field: format!("mounts[{index}].source"),
                message: "Source cannot be empty".into(),
            });
        }
        Ok(())
    }
}
