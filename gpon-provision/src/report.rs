//! Terminal rendering for compare and locate results.
//!
//! Same shape as the batch document: `key=value` summary lines followed by
//! `- [STATE]` items. Status tokens are colored for interactive use; colors
//! drop out automatically when stdout is not a terminal.

use colored::Colorize;

use olt_dump_core::{DeviceRecord, DirectiveKind, ProfileReference};

use crate::compare::{ComparisonResult, Status};

fn paint(status: Status) -> String {
    match status {
        Status::Ok => "OK".green().to_string(),
        Status::Nok => "NOK".red().to_string(),
    }
}

fn kinds(list: &[DirectiveKind]) -> String {
    if list.is_empty() {
        "none".to_string()
    } else {
        list.iter()
            .map(|kind| kind.id())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Render the compare report.
pub fn render_compare_text(results: &[ComparisonResult]) -> String {
    let ok = results
        .iter()
        .filter(|result| result.overall == Status::Ok)
        .count();
    let mut out = Vec::new();
    out.push(format!(
        "compare serials={} ok={} nok={}",
        results.len(),
        ok,
        results.len() - ok
    ));
    for result in results {
        out.push(format!(
            "- [{}] {} {} before={} after={}",
            paint(result.overall),
            result.serial,
            if result.header.is_empty() {
                "(not located)"
            } else {
                &result.header
            },
            paint(result.before_status),
            paint(result.after_status),
        ));
        out.push(format!("  missing_before: {}", kinds(&result.before_missing)));
        out.push(format!("  missing_after: {}", kinds(&result.after_missing)));
        for line in &result.lines_in_before_not_in_after {
            out.push(format!("  lost: {line}"));
        }
        for line in &result.unexpected_lines_in_after {
            out.push(format!("  unexpected: {line}"));
        }
    }
    out.join("\n")
}

/// Render one located device record with its checklist state.
pub fn render_locate_text(
    serial: &str,
    record: &DeviceRecord,
    profile: Option<&ProfileReference>,
    required: &[DirectiveKind],
    low_confidence: bool,
) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "locate serial={serial} address={} vlan={} low_confidence={low_confidence}",
        record.address,
        record
            .vlan
            .map(|vlan| vlan.to_string())
            .unwrap_or_else(|| "none".to_string()),
    ));
    match profile {
        Some(profile) => out.push(format!(
            "profile name={} version={} confirmed={}",
            profile.name, profile.version, profile.confirmed
        )),
        None => out.push("profile none (no vlan assignment)".to_string()),
    }
    out.push("directives".to_string());
    for kind in required {
        let state = if record.present.contains(kind) {
            "PRESENT".green().to_string()
        } else {
            "MISSING".red().to_string()
        };
        out.push(format!("- [{state}] {kind}"));
    }
    out.join("\n")
}
