//! Live mount table from `df`.

use std::process::Command;

use super::{dedup_mountpoints, MountCorrelation, MountMapResolver};

/// Queries `df --type=drvfs --portability` for drives mounted by the
/// compatibility layer.
///
/// On hosts without such mounts (or without `df`) the query fails and the
/// table is empty.
///
/// # Examples
///
/// ```no_run
/// use playconv::mount::{MountMapResolver, SystemMountResolver};
///
/// for mount in SystemMountResolver::new().resolve() {
///     println!("{} -> {}", mount.windows_source, mount.posix_mountpoint);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SystemMountResolver {
    fs_type: String,
}

impl Default for SystemMountResolver {
    fn default() -> Self {
        Self {
            fs_type: "drvfs".to_string(),
        }
    }
}

impl SystemMountResolver {
    /// Create a resolver for `drvfs` mounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Query a different filesystem type instead of `drvfs`.
    #[must_use]
    pub fn with_fs_type(mut self, fs_type: impl Into<String>) -> Self {
        self.fs_type = fs_type.into();
        self
    }
}

impl MountMapResolver for SystemMountResolver {
    fn resolve(&self) -> Vec<MountCorrelation> {
        let output = match Command::new("df")
            .arg(format!("--type={}", self.fs_type))
            .arg("--portability")
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                log::debug!("mount table query could not run: {e}");
                return Vec::new();
            }
        };

        if !output.status.success() {
            log::debug!("mount table query exited with {}", output.status);
            return Vec::new();
        }

        let table = parse_df_output(&String::from_utf8_lossy(&output.stdout));
        log::debug!("mount table lists {} {} drive(s)", table.len(), self.fs_type);
        table
    }
}

/// Parse `df --portability` output into correlations.
///
/// The first line is the header. Each data line is
/// `source total used available capacity mountpoint`; a mountpoint with
/// spaces spills over into further fields and is rejoined. Short lines are
/// skipped.
///
/// # Examples
///
/// ```
/// use playconv::mount::parse_df_output;
///
/// let out = "Filesystem 1024-blocks Used Available Capacity Mounted on\n\
///            C:\\ 100 40 60 40% /mnt/c\n";
/// let table = parse_df_output(out);
/// assert_eq!(table[0].posix_mountpoint, "/mnt/c");
/// ```
#[must_use]
pub fn parse_df_output(output: &str) -> Vec<MountCorrelation> {
    let table = output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 6 {
                if !line.trim().is_empty() {
                    log::debug!("skipping short mount table line: {line}");
                }
                return None;
            }
            Some(MountCorrelation {
                posix_mountpoint: fields[5..].join(" "),
                windows_source: normalize_source(fields[0]),
                total: fields[1].to_string(),
                used: fields[2].to_string(),
                available: fields[3].to_string(),
                capacity: fields[4].to_string(),
            })
        })
        .collect();
    dedup_mountpoints(table)
}

/// `df` reports drvfs sources as `C:\`; the trailing separator is not part
/// of the prefix that gets swapped.
fn normalize_source(source: &str) -> String {
    let trimmed = source.trim_end_matches(['\\', '/']);
    if trimmed.is_empty() {
        source.to_string()
    } else {
        trimmed.to_string()
    }
}
