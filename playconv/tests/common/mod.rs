//! Common test utilities for integration tests.
//!
//! A [`MusicLibrary`] is a temporary directory laid out like a
//! Windows-hosted POSIX environment: `mnt/c` stands in for drive `C:` and
//! `playlists/` holds source playlists.

use std::fs;
use std::path::{Path, PathBuf};

use playconv::{
    FakeExistenceChecker, MountCorrelation, PathFormatConverter, SystemExistenceChecker,
};
use tempfile::TempDir;

/// The mount table used by tests that never touch the disk.
#[allow(dead_code)]
pub fn virtual_mounts() -> Vec<MountCorrelation> {
    vec![
        MountCorrelation::new("/mnt/c", "C:"),
        MountCorrelation::new("/mnt/d", "D:"),
    ]
}

/// A converter over [`virtual_mounts`] where nothing exists.
#[allow(dead_code)]
pub fn virtual_converter() -> PathFormatConverter {
    PathFormatConverter::new(virtual_mounts(), FakeExistenceChecker::empty())
}

/// Temporary music library with a real drive mount.
#[allow(dead_code)]
pub struct MusicLibrary {
    temp_dir: TempDir,
    /// Stand-in mountpoint for `C:`.
    pub drive_c: PathBuf,
    /// Directory holding source playlists.
    pub playlists: PathBuf,
}

#[allow(dead_code)]
impl MusicLibrary {
    /// Create the library layout.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let drive_c = temp_dir.path().join("mnt").join("c");
        let playlists = temp_dir.path().join("playlists");
        fs::create_dir_all(&drive_c).expect("Failed to create drive dir");
        fs::create_dir_all(&playlists).expect("Failed to create playlist dir");
        Self {
            temp_dir,
            drive_c,
            playlists,
        }
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The mount table mapping [`MusicLibrary::drive_c`] to `C:`.
    pub fn mounts(&self) -> Vec<MountCorrelation> {
        vec![MountCorrelation::new(self.drive_c.display().to_string(), "C:")]
    }

    /// A converter that probes the real filesystem through [`MusicLibrary::mounts`].
    pub fn converter(&self) -> PathFormatConverter {
        PathFormatConverter::new(self.mounts(), SystemExistenceChecker::new(self.mounts()))
    }

    /// Create a track on drive C and return its POSIX path.
    pub fn add_track(&self, relative: &str) -> String {
        let path = self.drive_c.join(relative);
        fs::create_dir_all(path.parent().expect("track has a parent")).expect("mkdir");
        fs::write(&path, b"ID3").expect("Failed to write track");
        self.posix(relative)
    }

    /// POSIX path of `relative` on drive C.
    pub fn posix(&self, relative: &str) -> String {
        format!("{}/{relative}", self.drive_c.display())
    }

    /// Write a playlist into [`MusicLibrary::playlists`].
    pub fn write_playlist(&self, name: &str, lines: &[&str]) -> PathBuf {
        let path = self.playlists.join(name);
        fs::write(&path, lines.join("\n")).expect("Failed to write playlist");
        path
    }
}

/// Read a written playlist back.
#[allow(dead_code)]
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("reading {}: {e}", path.display()))
}
