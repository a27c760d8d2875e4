//! Completeness checking and block synthesis for one device.
//!
//! A migration never edits the dump: it derives a fresh record and emits a
//! new block. Directives that were present are carried over verbatim;
//! required directives that were absent are appended as canonical defaults
//! and reported as missing, so an auditor can always see what was patched.

use serde::Serialize;
use thiserror::Error;

use olt_dump_core::{
    extract, locate, resolve_profile, ConfigDump, DeviceRecord, DirectiveKind, LocateError,
    OnuAddress, ProfileNaming, ProfileReference,
};

use crate::checklist::Checklist;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MigrateError {
    #[error(transparent)]
    Locate(#[from] LocateError),
    /// The resolved profile name has no confirming definition in the dump.
    /// Emitting a config that references it would fail silently on the OLT,
    /// so generation for this serial must halt.
    #[error("line profile {name} is not provisioned in this dump")]
    ProfileNotProvisioned { name: String },
    /// The block carries no vlan-assignment directive, so neither the vlan
    /// line nor the profile name can be synthesized.
    #[error("no vlan assignment found in the device block")]
    VlanNotFound,
    #[error("config dump is empty")]
    DumpNotProvided,
}

#[derive(Debug, Clone)]
pub struct MigrateOptions {
    /// Password used when a credential line has to be synthesized.
    pub password: String,
    pub naming: ProfileNaming,
    /// Required directive set the synthesized block must satisfy.
    pub checklist: Checklist,
}

/// Outcome of migrating a single device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceMigration {
    pub serial: String,
    pub address: OnuAddress,
    pub vlan: u32,
    pub profile: ProfileReference,
    /// Directives that were absent and got patched in, canonical order.
    pub missing: Vec<DirectiveKind>,
    pub low_confidence: bool,
    pub block: String,
}

/// Locate, extract, resolve and re-synthesize one serial against a dump.
pub fn migrate_device(
    dump: &ConfigDump,
    serial: &str,
    opts: &MigrateOptions,
) -> Result<DeviceMigration, MigrateError> {
    let block = locate(dump, serial)?;
    let record = extract(dump, &block);
    let vlan = record.vlan.ok_or(MigrateError::VlanNotFound)?;

    let profile = resolve_profile(dump, vlan, &opts.naming);
    if !profile.confirmed {
        return Err(MigrateError::ProfileNotProvisioned {
            name: profile.name,
        });
    }

    // Prefer the dump's own casing of the serial over the query string.
    let serial = record.serial.clone().unwrap_or_else(|| serial.to_string());
    let (missing, text) =
        check_and_migrate(&record, &opts.checklist.required, &serial, vlan, &opts.password);

    Ok(DeviceMigration {
        serial,
        address: record.address,
        vlan,
        profile,
        missing,
        low_confidence: block.low_confidence,
        block: text,
    })
}

/// Report missing required directives and synthesize the corrected block.
///
/// Present lines are reproduced verbatim in their original order; patched
/// lines follow in canonical order; the block ends with exactly one
/// terminator regardless of what the source carried.
pub fn check_and_migrate(
    record: &DeviceRecord,
    required: &[DirectiveKind],
    serial: &str,
    vlan: u32,
    password: &str,
) -> (Vec<DirectiveKind>, String) {
    let missing = record.missing_from(required);

    let mut lines = Vec::new();
    lines.push(format!("gpon-onu {}", record.address));
    lines.extend(record.primary_lines.iter().cloned());
    lines.extend(record.secondary_lines.iter().cloned());
    for kind in &missing {
        lines.push(default_line(*kind, serial, vlan, password));
    }
    lines.push("quit".to_string());

    (missing, lines.join("\n"))
}

/// Canonical default line per directive, parameterized only by the device's
/// identity-bearing values.
pub fn default_line(kind: DirectiveKind, serial: &str, vlan: u32, password: &str) -> String {
    match kind {
        DirectiveKind::Mode => "iphost 1 mode pppoe".to_string(),
        DirectiveKind::Credentials => {
            format!("iphost 1 pppoe username {serial} password {password}")
        }
        DirectiveKind::Vlan => format!("iphost 1 vlan {vlan}"),
        DirectiveKind::ServiceInternet => "iphost 1 service internet".to_string(),
        DirectiveKind::ServiceRoute => {
            "iphost 1 service mode route nat enable cos 0 portlist 1,2 ssidlist 1".to_string()
        }
        DirectiveKind::MgmtMode => "iphost 2 mode dhcp".to_string(),
        DirectiveKind::MgmtService => "iphost 2 service management".to_string(),
        DirectiveKind::MgmtVlan => "iphost 2 vlan 2989".to_string(),
        DirectiveKind::AccessHttp => "access-control http mode allowall".to_string(),
        DirectiveKind::AccessHttps => "access-control https mode allowall".to_string(),
        DirectiveKind::AccessTelnet => "access-control telnet mode allowall".to_string(),
        DirectiveKind::AccessPing => "access-control ping mode allowall".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{load_checklist, Phase};
    use pretty_assertions::assert_eq;

    const DUMP: &str = "\
profile line id 7 name NEWAP1.2917.ACS
gpon-onu 1/4/21
iphost 1 mode pppoe
iphost 1 pppoe username RCMG3A8848C4 password 20260121
iphost 1 vlan 2917
iphost 1 service mode route nat enable cos 0 portlist 1,2 ssidlist 1
iphost 1 service internet
iphost 2 mode dhcp
iphost 2 service management
iphost 2 vlan 2989
quit
";

    fn options() -> MigrateOptions {
        MigrateOptions {
            password: "20260121".to_string(),
            naming: ProfileNaming::default(),
            checklist: load_checklist(Phase::After, None),
        }
    }

    #[test]
    fn patches_exactly_the_missing_access_control_group() {
        let dump = ConfigDump::parse(DUMP);
        let migration = migrate_device(&dump, "RCMG3A8848C4", &options()).expect("migrate");

        assert_eq!(
            migration.missing,
            vec![
                DirectiveKind::AccessHttp,
                DirectiveKind::AccessHttps,
                DirectiveKind::AccessTelnet,
                DirectiveKind::AccessPing,
            ]
        );
        for directive in [
            "access-control http mode allowall",
            "access-control https mode allowall",
            "access-control telnet mode allowall",
            "access-control ping mode allowall",
        ] {
            assert_eq!(
                migration.block.matches(directive).count(),
                1,
                "expected exactly one '{directive}'"
            );
        }
    }

    #[test]
    fn synthesized_block_has_exactly_one_terminator() {
        let dump = ConfigDump::parse(DUMP);
        let migration = migrate_device(&dump, "RCMG3A8848C4", &options()).expect("migrate");
        let terminators = migration
            .block
            .lines()
            .filter(|line| line.trim() == "quit")
            .count();
        assert_eq!(terminators, 1);
        assert!(migration.block.ends_with("quit"));
    }

    #[test]
    fn migration_is_idempotent_against_the_after_set() {
        let dump = ConfigDump::parse(DUMP);
        let migration = migrate_device(&dump, "RCMG3A8848C4", &options()).expect("migrate");

        let round_trip = ConfigDump::parse(&migration.block);
        let block = olt_dump_core::locate(&round_trip, "RCMG3A8848C4").expect("relocate");
        let record = olt_dump_core::extract(&round_trip, &block);
        let missing = record.missing_from(&options().checklist.required);
        assert_eq!(missing, Vec::<DirectiveKind>::new());
    }

    #[test]
    fn unprovisioned_profile_halts_generation() {
        let text = DUMP.replace("profile line id 7 name NEWAP1.2917.ACS\n", "");
        let dump = ConfigDump::parse(&text);
        let err = migrate_device(&dump, "RCMG3A8848C4", &options()).unwrap_err();
        assert_eq!(
            err,
            MigrateError::ProfileNotProvisioned {
                name: "NEWAP1.2917.ACS".to_string()
            }
        );
    }

    #[test]
    fn block_without_vlan_cannot_be_migrated() {
        let text = DUMP.replace("iphost 1 vlan 2917\n", "");
        let dump = ConfigDump::parse(&text);
        let err = migrate_device(&dump, "RCMG3A8848C4", &options()).unwrap_err();
        assert_eq!(err, MigrateError::VlanNotFound);
    }

    #[test]
    fn present_lines_are_carried_verbatim_before_patches() {
        let dump = ConfigDump::parse(DUMP);
        let migration = migrate_device(&dump, "RCMG3A8848C4", &options()).expect("migrate");
        let lines: Vec<&str> = migration.block.lines().collect();

        assert_eq!(lines[0], "gpon-onu 1/4/21");
        assert_eq!(lines[1], "iphost 1 mode pppoe");
        let http_idx = lines
            .iter()
            .position(|l| *l == "access-control http mode allowall")
            .expect("patched line");
        let mgmt_idx = lines
            .iter()
            .position(|l| *l == "iphost 2 vlan 2989")
            .expect("carried line");
        assert!(mgmt_idx < http_idx, "patches must follow carried lines");
    }
}
