//! Playlist transcoding.
//!
//! A playlist is read into [`PlaylistLine`]s, converted once per target
//! format by a [`PlaylistTranscoder`], and each non-empty output is saved to
//! the destination named in a [`TargetSpec`].

mod playlist;
mod target;
mod transcoder;

pub use playlist::{parse_playlist, read_playlist, PlaylistLine};
pub use target::{resolve_destination, TargetSpec};
pub use transcoder::{
    FormatReport, PlaylistTranscoder, TranscodeOptions, TranscodeReport, TranscodeResult,
    WriteOutcome,
};
