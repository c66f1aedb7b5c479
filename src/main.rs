use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use services::manifest;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let manifest = match &cli.manifest {
        Some(path) => manifest::load(path)?,
        None => manifest::builtin(),
    };

    match &cli.command {
        Some(Commands::Manifest) => commands::handle_manifest(&cli, &manifest)?,
        Some(Commands::Check { gate }) => {
            let entries = manifest::compile(&manifest)?;
            commands::handle_check(&cli, &entries, *gate)?;
        }
        // Bare invocation runs the full check, advisory exit status.
        None => {
            let entries = manifest::compile(&manifest)?;
            commands::handle_check(&cli, &entries, false)?;
        }
    }

    Ok(())
}
