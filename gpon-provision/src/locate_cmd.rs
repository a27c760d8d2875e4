use std::fs;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use gpon_provision::checklist::{load_checklist, Phase};
use gpon_provision::report::render_locate_text;
use olt_dump_core::{
    extract, locate, resolve_profile, ConfigDump, DeviceRecord, DirectiveKind, ProfileNaming,
    ProfileReference,
};

use crate::cli::{LocateArgs, OutputFormat};

#[derive(Debug, Serialize)]
struct LocateReport {
    serial: String,
    low_confidence: bool,
    record: DeviceRecord,
    profile: Option<ProfileReference>,
    missing: Vec<DirectiveKind>,
}

pub fn run_locate(args: LocateArgs) -> Result<()> {
    let dump_text = fs::read_to_string(&args.dump)
        .with_context(|| format!("failed to read {}", args.dump.display()))?;
    let dump = ConfigDump::parse(&dump_text);
    if dump.is_blank() {
        bail!("config dump is empty");
    }

    let block = locate(&dump, &args.serial)?;
    let record = extract(&dump, &block);
    let naming = ProfileNaming {
        family: args.family,
        suffix: args.suffix,
    };
    let profile = record
        .vlan
        .map(|vlan| resolve_profile(&dump, vlan, &naming));

    let checklist = load_checklist(Phase::After, args.checklists_dir.as_deref());

    match args.format {
        OutputFormat::Text => println!(
            "{}",
            render_locate_text(
                &args.serial,
                &record,
                profile.as_ref(),
                &checklist.required,
                block.low_confidence,
            )
        ),
        OutputFormat::Json => {
            let missing = record.missing_from(&checklist.required);
            let report = LocateReport {
                serial: args.serial,
                low_confidence: block.low_confidence,
                record,
                profile,
                missing,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
