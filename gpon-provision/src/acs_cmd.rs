use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gpon_provision::export::write_export;
use gpon_provision::vendor::raisecom::{parse_iphost_status, render_acs_migration};

use crate::cli::AcsArgs;

pub fn run_acs(args: AcsArgs) -> Result<()> {
    let status_text = fs::read_to_string(&args.status_file)
        .with_context(|| format!("failed to read {}", args.status_file.display()))?;
    let status = parse_iphost_status(&status_text)?;

    let snippet = render_acs_migration(
        &status,
        &args.line_profile,
        &args.service_profile,
        &args.vlan,
    );
    println!("{snippet}");

    if args.export {
        let path = write_export(Path::new("."), "acs", &snippet)?;
        eprintln!("saved: {}", path.display());
    }
    Ok(())
}
