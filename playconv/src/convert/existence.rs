//! Filesystem existence probes for either native path family.
//!
//! Checking a Windows path from a POSIX process (or the reverse) only works
//! inside a compatibility layer, so the probe is a trait. The system
//! implementation routes foreign paths through the mount table; tests use
//! [`FakeExistenceChecker`].

use std::collections::HashSet;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::convert::native;
use crate::format::NativeKind;
use crate::mount::MountCorrelation;

/// Answers whether a native path names something on the filesystem.
///
/// Implementations never fail: anything other than a positive answer,
/// including I/O errors, counts as "does not exist".
pub trait ExistenceChecker {
    /// Check `path`, read as a path of the given family.
    fn exists(&self, path: &str, kind: NativeKind) -> bool;

    /// The absolute form of `path` if it exists.
    ///
    /// Relative paths are anchored at the checker's working directory
    /// before the check, so the answer stays valid wherever it is written.
    fn locate(&self, path: &str, kind: NativeKind) -> Option<String> {
        self.exists(path, kind).then(|| path.to_string())
    }
}

/// Probes the real filesystem.
///
/// Paths of the host's own family are probed directly. Paths of the other
/// family are first translated through the mount table captured at
/// construction, which is how the compatibility layer exposes them.
///
/// # Examples
///
/// ```
/// use playconv::convert::existence::{ExistenceChecker, SystemExistenceChecker};
/// use playconv::format::NativeKind;
///
/// let checker = SystemExistenceChecker::new(Vec::new());
/// assert!(!checker.exists("/definitely/not/here.mp3", NativeKind::Posix));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SystemExistenceChecker {
    mounts: Vec<MountCorrelation>,
    working_dir: Option<PathBuf>,
}

impl SystemExistenceChecker {
    /// Create a checker that resolves foreign paths through `mounts`.
    #[must_use]
    pub fn new(mounts: Vec<MountCorrelation>) -> Self {
        Self {
            mounts,
            working_dir: None,
        }
    }

    /// Anchor relative paths at `dir` instead of the process directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    fn working_dir(&self) -> Option<PathBuf> {
        match &self.working_dir {
            Some(dir) => Some(dir.clone()),
            None => env::current_dir().ok(),
        }
    }

    const fn is_host_family(kind: NativeKind) -> bool {
        matches!(
            (kind, cfg!(windows)),
            (NativeKind::Posix, false) | (NativeKind::Windows, true)
        )
    }

    fn host_path(&self, path: &str, kind: NativeKind) -> Option<String> {
        match (kind, cfg!(windows)) {
            (NativeKind::Posix, false) | (NativeKind::Windows, true) => Some(path.to_string()),
            (NativeKind::Windows, false) => native::windows_to_posix(path, &self.mounts),
            (NativeKind::Posix, true) => native::posix_to_windows(path, &self.mounts),
        }
    }
}

impl ExistenceChecker for SystemExistenceChecker {
    fn exists(&self, path: &str, kind: NativeKind) -> bool {
        let Some(host_path) = self.host_path(path, kind) else {
            log::debug!("no mount maps {path} onto this host");
            return false;
        };

        match fs::metadata(Path::new(&host_path)) {
            Ok(_) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                log::debug!("existence check for {host_path} failed: {e}");
                false
            }
        }
    }

    fn locate(&self, path: &str, kind: NativeKind) -> Option<String> {
        // foreign relative paths have no mount and fail the check below
        let located = if Self::is_host_family(kind) && native::is_relative(path, kind) {
            let dir = self.working_dir()?;
            native::anchor(path, dir.to_str()?, kind)?
        } else {
            path.to_string()
        };
        self.exists(&located, kind).then_some(located)
    }
}

/// In-memory checker with an explicit set of existing paths.
///
/// # Examples
///
/// ```
/// use playconv::convert::existence::{ExistenceChecker, FakeExistenceChecker};
/// use playconv::format::NativeKind;
///
/// let checker = FakeExistenceChecker::empty().with_posix("/mnt/c/a.mp3");
/// assert!(checker.exists("/mnt/c/a.mp3", NativeKind::Posix));
/// assert!(!checker.exists("/mnt/c/a.mp3", NativeKind::Windows));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FakeExistenceChecker {
    existing: HashSet<(NativeKind, String)>,
    working_dir: Option<String>,
}

impl FakeExistenceChecker {
    /// A checker for which nothing exists.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Mark a POSIX path as existing.
    #[must_use]
    pub fn with_posix(mut self, path: impl Into<String>) -> Self {
        self.existing.insert((NativeKind::Posix, path.into()));
        self
    }

    /// Mark a Windows path as existing.
    #[must_use]
    pub fn with_windows(mut self, path: impl Into<String>) -> Self {
        self.existing.insert((NativeKind::Windows, path.into()));
        self
    }

    /// Anchor relative POSIX paths at `dir`.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<String>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

impl ExistenceChecker for FakeExistenceChecker {
    fn exists(&self, path: &str, kind: NativeKind) -> bool {
        self.existing.contains(&(kind, path.to_string()))
    }

    fn locate(&self, path: &str, kind: NativeKind) -> Option<String> {
        let located = match (&self.working_dir, kind) {
            (Some(dir), NativeKind::Posix) => native::anchor(path, dir, kind)?,
            _ => path.to_string(),
        };
        self.exists(&located, kind).then_some(located)
    }
}
