//! Configuration for the playconv command line.
//!
//! The conversion core never reads configuration: callers resolve source
//! format, target formats and destinations here and pass them in.
//!
//! # Configuration Precedence
//!
//! Layers are merged with the following precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PLAYCONV_*`)
//! 3. The configuration file (`--config`, or `~/.playconv/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use playconv::config::ConfigBuilder;
//! use playconv::PathFormat;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! for format in config.effective_types() {
//!     println!("{format} -> {:?}", config.destination_for(format));
//! }
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
