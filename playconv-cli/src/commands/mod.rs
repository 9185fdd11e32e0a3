//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `export`: Convert library playlists into other formats
//! - `import`: Convert foreign playlists into the library's format
//! - `convert`: Convert a single path
//! - `mounts`: Show the mount table
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod convert;
pub mod export;
pub mod import;
pub mod mounts;

pub use completions::CompletionsCommand;
pub use convert::ConvertCommand;
pub use export::ExportCommand;
pub use import::ImportCommand;
pub use mounts::MountsCommand;
