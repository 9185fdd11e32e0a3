//! Mounts command implementation.
//!
//! This module implements the `mounts` command, which prints the mount
//! table used to map POSIX paths onto Windows drives.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use playconv::MountCorrelation;
use std::io::{self, Write};

/// Show the POSIX to Windows mount table.
#[derive(Args)]
pub struct MountsCommand {
    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,
}

impl MountsCommand {
    /// Execute the mounts command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mounts = config.mount_resolver().resolve();

        let mut stdout = io::stdout().lock();
        if self.json {
            let json = serde_json::to_string_pretty(&mounts).map_err(io::Error::other)?;
            writeln!(stdout, "{json}")?;
            return Ok(());
        }

        if mounts.is_empty() {
            if !global.quiet {
                eprintln!("No mounts found");
            }
            return Ok(());
        }

        write_table(&mut stdout, &mounts)?;
        Ok(())
    }
}

/// Write the mount table as aligned columns.
fn write_table(w: &mut impl Write, mounts: &[MountCorrelation]) -> io::Result<()> {
    let width = mounts
        .iter()
        .map(|m| m.posix_mountpoint.len())
        .chain(std::iter::once("MOUNTPOINT".len()))
        .max()
        .unwrap_or_default();

    writeln!(w, "{:<width$}  SOURCE", "MOUNTPOINT")?;
    for mount in mounts {
        writeln!(w, "{:<width$}  {}", mount.posix_mountpoint, mount.windows_source)?;
    }
    Ok(())
}
