//! Common test utilities for CLI integration tests.
//!
//! Every test gets its own temporary library:
//! - a `drive` directory standing in for the Windows drive `C:`
//! - a `playlists` directory holding the library's own playlists
//! - a `config.yaml` wiring both together with a static mount table

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the developer's own setup.
const PLAYCONV_VARS: [&str; 5] = [
    "PLAYCONV_CONFIG",
    "PLAYCONV_LOG_MODE",
    "PLAYCONV_SOURCE_FORMAT",
    "PLAYCONV_TYPES",
    "PLAYCONV_PLAYLIST_DIR",
];

/// Test environment with an isolated music library.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Directory mounted as `C:`
    pub drive: PathBuf,
    /// The library's playlist directory
    pub playlists: PathBuf,
    /// The configuration file passed with `--config`
    pub config_file: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with a POSIX library.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let drive = temp_path.join("drive");
        let playlists = temp_path.join("playlists");
        std::fs::create_dir_all(&drive).expect("Failed to create drive dir");
        std::fs::create_dir_all(&playlists).expect("Failed to create playlist dir");

        let env = Self {
            config_file: temp_path.join("config.yaml"),
            temp_dir,
            temp_path,
            drive,
            playlists,
        };
        env.write_config("");
        env
    }

    /// Rewrite the configuration file with `extra` appended to the defaults.
    pub fn write_config(&self, extra: &str) {
        let content = format!(
            "source_format: posix\n\
             playlist_dir: '{}'\n\
             mounts:\n  - mountpoint: '{}'\n    source: 'C:'\n{extra}",
            self.playlists.display(),
            self.drive.display()
        );
        std::fs::write(&self.config_file, content).expect("Failed to write config");
    }

    /// A command with no `--config` and a scrubbed environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("playconv").expect("Failed to find playconv binary");
        for var in PLAYCONV_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.temp_path);
        cmd
    }

    /// A command reading this environment's configuration file.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config").arg(&self.config_file);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create an empty track under the drive and return its POSIX path.
    pub fn add_track(&self, relative: &str) -> String {
        let path = self.drive.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create track dir");
        }
        std::fs::write(&path, b"").expect("Failed to create track");
        path.display().to_string()
    }

    /// The POSIX path of `relative` under the drive, without creating it.
    pub fn posix(&self, relative: &str) -> String {
        self.drive.join(relative).display().to_string()
    }

    /// Write a playlist into the library's playlist directory.
    pub fn write_playlist(&self, name: &str, lines: &[&str]) -> PathBuf {
        let path = self.playlists.join(name);
        std::fs::write(&path, lines.join("\n")).expect("Failed to write playlist");
        path
    }

    /// Write a playlist anywhere under the temp directory.
    pub fn write_file(&self, relative: &str, lines: &[&str]) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create dir");
        }
        std::fs::write(&path, lines.join("\n")).expect("Failed to write file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a file the CLI wrote.
#[allow(dead_code)]
pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
}
