use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "verify-deploy",
    version,
    about = "Static verification of deployment artifacts"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Directory manifest paths resolve against (defaults to the executable's directory)"
    )]
    pub base_dir: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Manifest JSON file overriding the built-in check table"
    )]
    pub manifest: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Check {
        #[arg(
            long,
            default_value_t = false,
            help = "Exit non-zero when any check is not a pass"
        )]
        gate: bool,
    },
    Manifest,
}
