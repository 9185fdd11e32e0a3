//! Mount correlations between POSIX mountpoints and Windows drive sources.
//!
//! A compatibility layer exposes each Windows drive under a POSIX
//! directory (`C:` at `/mnt/c`). The converter needs that table to move
//! paths between the two native families. Resolution is trait-based so the
//! live system query can be swapped for a fixed table in configuration and
//! tests.
//!
//! # Examples
//!
//! ```
//! use playconv::mount::{MountCorrelation, MountMapResolver, StaticMountResolver};
//!
//! let resolver = StaticMountResolver::new(vec![MountCorrelation::new("/mnt/c", "C:")]);
//! let table = resolver.resolve();
//! assert_eq!(table[0].windows_source, "C:");
//! ```

mod system;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use system::{parse_df_output, SystemMountResolver};

/// One mounted drive as reported by the mount table.
///
/// Only `posix_mountpoint` and `windows_source` take part in conversion;
/// the capacity figures are carried through for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountCorrelation {
    /// POSIX directory the drive is mounted at, e.g. `/mnt/c`.
    #[serde(rename = "mountpoint")]
    pub posix_mountpoint: String,
    /// Windows drive source, e.g. `C:`.
    #[serde(rename = "source")]
    pub windows_source: String,
    /// Total size as reported by the system.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub total: String,
    /// Used space as reported by the system.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub used: String,
    /// Available space as reported by the system.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub available: String,
    /// Use percentage as reported by the system.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub capacity: String,
}

impl MountCorrelation {
    /// Create a correlation without capacity figures.
    #[must_use]
    pub fn new(posix_mountpoint: impl Into<String>, windows_source: impl Into<String>) -> Self {
        Self {
            posix_mountpoint: posix_mountpoint.into(),
            windows_source: windows_source.into(),
            total: String::new(),
            used: String::new(),
            available: String::new(),
            capacity: String::new(),
        }
    }
}

/// Source of the current mount table.
///
/// Implementations never fail: an unavailable or broken query yields an
/// empty table, which simply makes native-to-native conversions
/// unresolvable.
pub trait MountMapResolver {
    /// Query the current correlations, in the order the source reports them.
    fn resolve(&self) -> Vec<MountCorrelation>;
}

/// Resolver backed by a fixed table.
#[derive(Debug, Clone, Default)]
pub struct StaticMountResolver {
    table: Vec<MountCorrelation>,
}

impl StaticMountResolver {
    /// Create a resolver that always reports `table`.
    #[must_use]
    pub fn new(table: Vec<MountCorrelation>) -> Self {
        Self { table }
    }
}

impl MountMapResolver for StaticMountResolver {
    fn resolve(&self) -> Vec<MountCorrelation> {
        dedup_mountpoints(self.table.clone())
    }
}

/// Drop correlations whose mountpoint was already seen, keeping the first.
///
/// Mountpoints are prefix-match keys, so a table must not list one twice.
#[must_use]
pub fn dedup_mountpoints(table: Vec<MountCorrelation>) -> Vec<MountCorrelation> {
    let mut seen = HashSet::new();
    table
        .into_iter()
        .filter(|m| seen.insert(m.posix_mountpoint.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_resolver_preserves_order() {
        let resolver = StaticMountResolver::new(vec![
            MountCorrelation::new("/mnt/d", "D:"),
            MountCorrelation::new("/mnt/c", "C:"),
        ]);
        let table = resolver.resolve();
        assert_eq!(table[0].posix_mountpoint, "/mnt/d");
        assert_eq!(table[1].posix_mountpoint, "/mnt/c");
    }

    #[test]
    fn test_dedup_keeps_first_mountpoint() {
        let table = dedup_mountpoints(vec![
            MountCorrelation::new("/mnt/c", "C:"),
            MountCorrelation::new("/mnt/c", "E:"),
            MountCorrelation::new("/mnt/e", "E:"),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].windows_source, "C:");
    }

    #[test]
    fn test_empty_static_resolver() {
        assert!(StaticMountResolver::default().resolve().is_empty());
    }

    #[test]
    fn test_deserialize_from_config_shape() {
        let table: Vec<MountCorrelation> =
            serde_yaml::from_str("- mountpoint: /mnt/c\n  source: 'C:'\n").unwrap();
        assert_eq!(table, vec![MountCorrelation::new("/mnt/c", "C:")]);
    }
}
