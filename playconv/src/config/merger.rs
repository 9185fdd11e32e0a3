//! Configuration merging and precedence handling.

use crate::config::schema::Config;

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use playconv::config::{Config, ConfigMerger};
/// use playconv::PathFormat;
///
/// let low = Config { source_format: Some(PathFormat::Posix), ..Default::default() };
/// let high = Config { source_format: Some(PathFormat::Windows), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.source_format, Some(PathFormat::Windows));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge layers given from lowest to highest precedence.
    #[must_use]
    pub fn merge(layers: Vec<Config>) -> Config {
        let mut result = Config::default();
        for layer in layers {
            Self::merge_into(&mut result, &layer);
        }
        result
    }

    /// Merge `source` into `target`, `source` winning.
    ///
    /// # Merging Rules
    ///
    /// - Simple fields and `types`: source overwrites if Some
    /// - Destinations: merged per format
    /// - Mounts: complete replacement
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.source_format.is_some() {
            target.source_format = source.source_format;
        }

        if source.types.is_some() {
            target.types.clone_from(&source.types);
        }

        if source.playlist_dir.is_some() {
            target.playlist_dir.clone_from(&source.playlist_dir);
        }

        if let Some(ref source_destinations) = source.destinations {
            target
                .destinations
                .get_or_insert_with(Default::default)
                .extend(source_destinations.iter().map(|(f, p)| (*f, p.clone())));
        }

        if source.mounts.is_some() {
            target.mounts.clone_from(&source.mounts);
        }
    }
}
