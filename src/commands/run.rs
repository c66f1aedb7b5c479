use crate::cli::Cli;
use crate::domain::models::Manifest;
use crate::services::manifest::{self, CompiledEntry};
use crate::services::output::{print_one, print_out};
use crate::services::report;

pub fn handle_check(cli: &Cli, entries: &[CompiledEntry], gate: bool) -> anyhow::Result<()> {
    let base = manifest::base_dir(cli.base_dir.as_deref())?;
    let report = report::run_manifest(&base, entries);
    let gate_tripped = gate && report.overall != "ok";

    print_one(cli.json, report, report::render_lines)?;

    // Advisory by default; --gate opts into a failing exit status.
    if gate_tripped {
        std::process::exit(1);
    }
    Ok(())
}

pub fn handle_manifest(cli: &Cli, manifest: &Manifest) -> anyhow::Result<()> {
    print_out(cli.json, &manifest.entries, |e| {
        format!("{}\t{}", e.file, e.patterns.join(", "))
    })
}
