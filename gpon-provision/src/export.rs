//! Export adapter: writes an output document under a timestamped name.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate};

/// `export_<context>_<YYYYMMDD>_<HHMMSS>.txt`
pub fn export_filename(context: &str, now: DateTime<Local>) -> String {
    format!("export_{context}_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

/// Operator convention for generated PPPoE passwords: today's date.
pub fn default_password(today: NaiveDate) -> String {
    today.format("%Y%m%d").to_string()
}

/// Write `content` into `dir` under a timestamped export name.
pub fn write_export(dir: &Path, context: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(export_filename(context, Local::now()));
    std::fs::write(&path, content)
        .with_context(|| format!("failed to write export file {}", path.display()))?;
    Ok(path)
}
