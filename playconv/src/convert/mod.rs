//! Path format conversion.
//!
//! Conversion runs along two independent axes:
//!
//! - **Family**: POSIX ↔ Windows, through the mount table. Only needed
//!   when source and target belong to different native families.
//! - **Encoding**: native ↔ `file:` URI. A URI format is its family's
//!   native path, percent-encoded behind `file://`.
//!
//! [`PathFormatConverter`] combines both into the full 4×4 matrix and adds
//! the existence-checked mode used when importing foreign playlists.
//!
//! # Examples
//!
//! ```
//! use playconv::convert::PathFormatConverter;
//! use playconv::convert::existence::FakeExistenceChecker;
//! use playconv::mount::MountCorrelation;
//! use playconv::PathFormat;
//!
//! let converter = PathFormatConverter::new(
//!     vec![MountCorrelation::new("/mnt/c", "C:")],
//!     FakeExistenceChecker::empty().with_posix("/mnt/c/music/song.mp3"),
//! );
//!
//! let outcome = converter.convert_unknown_source(r"C:\music\song.mp3", PathFormat::Posix, true);
//! assert_eq!(outcome.converted().as_deref(), Some("/mnt/c/music/song.mp3"));
//! ```

pub mod converter;
pub mod existence;
pub mod native;
pub mod uri;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use converter::{ConversionOutcome, PathFormatConverter};
pub use existence::{ExistenceChecker, FakeExistenceChecker, SystemExistenceChecker};
