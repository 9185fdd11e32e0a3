//! Convert command implementation.
//!
//! This module implements the `convert` command, which converts one path
//! string and prints the result.

use crate::cli::FormatArg;
use crate::error::CliError;
use crate::utils::{build_converter, load_configuration, GlobalOptions};
use clap::Args;
use playconv::{ConversionOutcome, PathFormat};

/// Convert a single path.
#[derive(Args)]
pub struct ConvertCommand {
    /// The path, in any of the four formats
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,

    /// Format to convert into
    #[arg(long, value_name = "FORMAT", value_enum, ignore_case = true)]
    pub to: FormatArg,

    /// Format of TEXT (default: try every format in turn)
    #[arg(long, value_name = "FORMAT", value_enum, ignore_case = true)]
    pub from: Option<FormatArg>,

    /// Only accept a result that exists on disk
    #[arg(long)]
    pub must_exist: bool,
}

impl ConvertCommand {
    /// Execute the convert command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let converter = build_converter(&config);
        let target = PathFormat::from(self.to);

        let outcome = match self.from {
            Some(source) => {
                converter.convert(&self.text, source.into(), target, self.must_exist)
            }
            None => converter.convert_unknown_source(&self.text, target, self.must_exist),
        };

        match outcome {
            ConversionOutcome::Converted(converted) => {
                println!("{converted}");
                Ok(())
            }
            ConversionOutcome::Unresolvable => Err(CliError::SemanticFailure(format!(
                "'{}' cannot be converted to {target}",
                self.text
            ))),
        }
    }
}
