//! Bulk migration over a serial list, composed into one paste-ready
//! document.
//!
//! Per-serial failures never abort the run: each one becomes a visible
//! `# <serial> - skipped: <reason>` line in the document, in input order.

use serde::Serialize;

use olt_dump_core::ConfigDump;

use crate::cache::BlockCache;
use crate::migrate::{migrate_device, DeviceMigration, MigrateError, MigrateOptions};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BatchOutcome {
    Migrated(DeviceMigration),
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchItem {
    pub serial: String,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub migrated: usize,
    pub skipped: usize,
    pub items: Vec<BatchItem>,
    /// The paste-ready output document.
    pub document: String,
}

/// Migrate every serial against the dump, in input order. The cache is
/// refreshed on every success; on failure it only annotates the skip line.
pub fn run_batch(
    dump_text: &str,
    serials: &[String],
    cache: &mut BlockCache,
    opts: &MigrateOptions,
) -> Result<BatchReport, MigrateError> {
    let dump = ConfigDump::parse(dump_text);
    if dump.is_blank() {
        return Err(MigrateError::DumpNotProvided);
    }

    let mut items = Vec::with_capacity(serials.len());
    for serial in serials {
        let outcome = match migrate_device(&dump, serial, opts) {
            Ok(migration) => {
                cache.insert(&migration.serial, &migration.block);
                BatchOutcome::Migrated(migration)
            }
            Err(err) => {
                let mut reason = err.to_string();
                if cache.get(serial).is_some() {
                    reason.push_str(" (cached block available from a previous run)");
                }
                BatchOutcome::Skipped { reason }
            }
        };
        items.push(BatchItem {
            serial: serial.clone(),
            outcome,
        });
    }

    let document = compose_document(&dump, &items);
    let migrated = items
        .iter()
        .filter(|item| matches!(item.outcome, BatchOutcome::Migrated(_)))
        .count();

    Ok(BatchReport {
        migrated,
        skipped: items.len() - migrated,
        items,
        document,
    })
}

fn compose_document(dump: &ConfigDump, items: &[BatchItem]) -> String {
    let mut out = Vec::new();
    out.push("# gpon-provision batch migration".to_string());
    out.push(format!(
        "# serials: {}, dump lines: {}",
        items.len(),
        dump.len()
    ));
    for item in items {
        out.push(String::new());
        match &item.outcome {
            BatchOutcome::Migrated(migration) => {
                out.push(format!(
                    "# ===== {} @ {} =====",
                    migration.serial, migration.address
                ));
                out.push(format!(
                    "# line-profile: {} ({})",
                    migration.profile.name,
                    if migration.profile.confirmed {
                        "confirmed"
                    } else {
                        "unconfirmed"
                    }
                ));
                if migration.missing.is_empty() {
                    out.push("# patched: none".to_string());
                } else {
                    let patched: Vec<&str> =
                        migration.missing.iter().map(|kind| kind.id()).collect();
                    out.push(format!("# patched: {}", patched.join(", ")));
                }
                if migration.low_confidence {
                    out.push(
                        "# warning: block extended to end of dump (low confidence)".to_string(),
                    );
                }
                out.push(migration.block.clone());
            }
            BatchOutcome::Skipped { reason } => {
                out.push(format!("# {} - skipped: {reason}", item.serial));
            }
        }
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{load_checklist, Phase};
    use olt_dump_core::ProfileNaming;

    const DUMP: &str = "\
profile line id 7 name NEWAP1.2917.ACS
gpon-onu 1/4/21
iphost 1 mode pppoe
iphost 1 pppoe username AAAA1111 password x
iphost 1 vlan 2917
iphost 1 service mode route nat enable cos 0 portlist 1,2 ssidlist 1
iphost 1 service internet
quit
gpon-onu 1/4/22
iphost 1 mode pppoe
iphost 1 pppoe username CCCC3333 password x
iphost 1 vlan 2917
iphost 1 service mode route nat enable cos 0 portlist 1,2 ssidlist 1
iphost 1 service internet
quit
";

    fn options() -> MigrateOptions {
        MigrateOptions {
            password: "20260121".to_string(),
            naming: ProfileNaming::default(),
            checklist: load_checklist(Phase::After, None),
        }
    }

    fn serials(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn output_preserves_input_order_around_skips() {
        let mut cache = BlockCache::default();
        let report = run_batch(
            DUMP,
            &serials(&["AAAA1111", "BBBB2222", "CCCC3333"]),
            &mut cache,
            &options(),
        )
        .expect("batch");

        assert_eq!(report.migrated, 2);
        assert_eq!(report.skipped, 1);

        let a = report.document.find("# ===== AAAA1111").expect("A section");
        let b = report
            .document
            .find("# BBBB2222 - skipped: serial not found in dump")
            .expect("B skip line");
        let c = report.document.find("# ===== CCCC3333").expect("C section");
        assert!(a < b && b < c, "document must follow input order");
    }

    #[test]
    fn successful_migrations_refresh_the_cache() {
        let mut cache = BlockCache::default();
        run_batch(DUMP, &serials(&["AAAA1111"]), &mut cache, &options()).expect("batch");
        assert!(cache.get("AAAA1111").expect("cached").contains("iphost 1 vlan 2917"));
    }

    #[test]
    fn skip_line_mentions_a_cached_block_when_one_exists() {
        let mut cache = BlockCache::default();
        cache.insert("BBBB2222", "gpon-onu 1/1/1\nquit");
        let report =
            run_batch(DUMP, &serials(&["BBBB2222"]), &mut cache, &options()).expect("batch");
        assert!(report
            .document
            .contains("# BBBB2222 - skipped: serial not found in dump (cached block available"));
    }

    #[test]
    fn blank_dump_fails_the_batch_immediately() {
        let mut cache = BlockCache::default();
        let err = run_batch("  \n", &serials(&["AAAA1111"]), &mut cache, &options()).unwrap_err();
        assert_eq!(err, MigrateError::DumpNotProvided);
    }
}
