use std::fs;

use anyhow::{Context, Result};
use gpon_provision::checklist::{load_checklist_with_source, Phase};
use gpon_provision::compare::{compare_dumps, CompareChecklists};
use gpon_provision::report::render_compare_text;

use crate::cli::{CompareArgs, OutputFormat};
use crate::migrate_cmd::collect_serials;

pub fn run_compare(args: CompareArgs) -> Result<()> {
    let before = fs::read_to_string(&args.before)
        .with_context(|| format!("failed to read {}", args.before.display()))?;
    let after = fs::read_to_string(&args.after)
        .with_context(|| format!("failed to read {}", args.after.display()))?;
    let serials = collect_serials(args.serials_file.as_deref(), &args.serial)?;

    let (before_list, before_source) =
        load_checklist_with_source(Phase::Before, args.checklists_dir.as_deref());
    let (after_list, after_source) =
        load_checklist_with_source(Phase::After, args.checklists_dir.as_deref());
    let checklists = CompareChecklists {
        before: before_list,
        after: after_list,
    };

    let results = compare_dumps(&before, &after, &serials, &checklists)?;

    if args.verbose {
        println!("Using checklists: before={before_source} after={after_source}");
    }
    match args.format {
        OutputFormat::Text => println!("{}", render_compare_text(&results)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
    }
    Ok(())
}
