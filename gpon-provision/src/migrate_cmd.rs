use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::Local;
use gpon_provision::batch::run_batch;
use gpon_provision::cache::BlockCache;
use gpon_provision::checklist::{load_checklist_with_source, Phase};
use gpon_provision::export::{default_password, write_export};
use gpon_provision::migrate::MigrateOptions;
use olt_dump_core::ProfileNaming;

use crate::cli::{MigrateArgs, OutputFormat};

pub fn run_migrate(args: MigrateArgs) -> Result<()> {
    let dump_text = fs::read_to_string(&args.dump)
        .with_context(|| format!("failed to read {}", args.dump.display()))?;
    let serials = collect_serials(args.serials_file.as_deref(), &args.serial)?;

    let (checklist, checklist_source) =
        load_checklist_with_source(Phase::After, args.checklists_dir.as_deref());
    let mut cache = match &args.cache_file {
        Some(path) => BlockCache::load(path)?,
        None => BlockCache::default(),
    };

    let opts = MigrateOptions {
        password: args
            .password
            .unwrap_or_else(|| default_password(Local::now().date_naive())),
        naming: ProfileNaming {
            family: args.family,
            suffix: args.suffix,
        },
        checklist,
    };

    let report = run_batch(&dump_text, &serials, &mut cache, &opts)?;
    if let Some(path) = &args.cache_file {
        cache.save(path)?;
    }

    if args.verbose {
        println!("Using checklist: {checklist_source}");
    }

    let rendered = match args.format {
        OutputFormat::Text => report.document.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
    };

    if let Some(path) = &args.output {
        fs::write(path, &rendered)
            .with_context(|| format!("failed to write output {}", path.display()))?;
    } else if args.export {
        let path = write_export(Path::new("."), "migrate", &rendered)?;
        eprintln!("saved: {}", path.display());
    } else {
        println!("{rendered}");
    }
    Ok(())
}

pub fn collect_serials(file: Option<&Path>, direct: &[String]) -> Result<Vec<String>> {
    let mut serials = Vec::new();
    if let Some(path) = file {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serials.extend(
            raw.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(ToOwned::to_owned),
        );
    }
    serials.extend(direct.iter().map(|s| s.trim().to_owned()));
    if serials.is_empty() {
        bail!("no serials given: pass --serials-file or --serial");
    }
    Ok(serials)
}
