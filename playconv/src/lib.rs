#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # playconv
//!
//! Converts the path references inside line-oriented playlists between
//! POSIX paths, Windows drive paths and their `file:` URI forms.
//!
//! POSIX and Windows paths are related through the mount table of a
//! Windows-hosted POSIX environment, where `/mnt/c` is the drive `C:`.
//!
//! ## Core Types
//!
//! - [`PathFormat`]: the four path representations
//! - [`MountCorrelation`] and [`MountMapResolver`]: the mount table
//! - [`PathFormatConverter`] and [`ConversionOutcome`]: single-path conversion
//! - [`PlaylistTranscoder`] and [`TargetSpec`]: whole-playlist conversion
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use playconv::{FakeExistenceChecker, MountCorrelation, PathFormat, PathFormatConverter};
//!
//! let converter = PathFormatConverter::new(
//!     vec![MountCorrelation::new("/mnt/c", "C:")],
//!     FakeExistenceChecker::empty(),
//! );
//!
//! let windows = converter
//!     .convert_known_source("/mnt/c/music/song.mp3", PathFormat::Posix, PathFormat::Windows)
//!     .converted();
//! assert_eq!(windows.as_deref(), Some(r"C:\music\song.mp3"));
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod format;
pub mod logging;
pub mod mount;
pub mod transcode;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use convert::{
    ConversionOutcome, ExistenceChecker, FakeExistenceChecker, PathFormatConverter,
    SystemExistenceChecker,
};
pub use error::{Error, Result};
pub use format::{NativeKind, PathFormat};
pub use logging::{init_logger, LogLevel, Logger};
pub use mount::{MountCorrelation, MountMapResolver, StaticMountResolver, SystemMountResolver};
pub use transcode::{
    PlaylistLine, PlaylistTranscoder, TargetSpec, TranscodeOptions, TranscodeReport,
    TranscodeResult, WriteOutcome,
};
