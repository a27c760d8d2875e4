//! Before/after compliance comparison over two dumps.

use serde::Serialize;

use olt_dump_core::{
    directive, extract, lines_missing_from, locate, unexpected_lines, ConfigDump, DeviceRecord,
    DirectiveKind,
};

use crate::checklist::Checklist;
use crate::migrate::MigrateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Ok,
    Nok,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Status::Ok => "OK",
            Status::Nok => "NOK",
        })
    }
}

/// Per-serial comparison outcome. A side that could not be located is marked
/// fully missing rather than failing the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub serial: String,
    /// Device header, taken from whichever side was located.
    pub header: String,
    pub before_missing: Vec<DirectiveKind>,
    pub after_missing: Vec<DirectiveKind>,
    pub before_status: Status,
    pub after_status: Status,
    /// Primary lines present before but absent after, by exact text.
    pub lines_in_before_not_in_after: Vec<String>,
    /// After-side lines that are neither carried over from before nor on the
    /// allow-list of expected new directives. Surfaces unintended drift.
    pub unexpected_lines_in_after: Vec<String>,
    pub overall: Status,
}

/// Required sets for the two sides; the after set is the superset.
#[derive(Debug, Clone)]
pub struct CompareChecklists {
    pub before: Checklist,
    pub after: Checklist,
}

/// Compare every serial across two dumps, preserving input order.
pub fn compare_dumps(
    before_text: &str,
    after_text: &str,
    serials: &[String],
    checklists: &CompareChecklists,
) -> Result<Vec<ComparisonResult>, MigrateError> {
    let before = ConfigDump::parse(before_text);
    let after = ConfigDump::parse(after_text);
    if before.is_blank() || after.is_blank() {
        return Err(MigrateError::DumpNotProvided);
    }

    Ok(serials
        .iter()
        .map(|serial| compare_serial(&before, &after, serial, checklists))
        .collect())
}

fn compare_serial(
    before: &ConfigDump,
    after: &ConfigDump,
    serial: &str,
    checklists: &CompareChecklists,
) -> ComparisonResult {
    let before_side = side_record(before, serial);
    let after_side = side_record(after, serial);

    let header = after_side
        .as_ref()
        .or(before_side.as_ref())
        .map(|side| format!("gpon-onu {}", side.record.address))
        .unwrap_or_default();

    let before_missing = side_missing(&before_side, &checklists.before.required);
    let after_missing = side_missing(&after_side, &checklists.after.required);
    let before_status = status_of(&before_missing);
    let after_status = status_of(&after_missing);

    let before_primary = before_side
        .as_ref()
        .map(|side| side.record.primary_lines.clone())
        .unwrap_or_default();
    let after_lines = after_side.as_ref().map(|side| side.lines.clone()).unwrap_or_default();
    let before_lines = before_side.as_ref().map(|side| side.lines.clone()).unwrap_or_default();
    let after_primary = after_side
        .as_ref()
        .map(|side| side.record.primary_lines.clone())
        .unwrap_or_default();

    let lost = lines_missing_from(&before_primary, &after_primary);
    let unexpected = unexpected_lines(&after_lines, &before_lines, |line| {
        directive::is_secondary_line(line)
            || directive::is_terminator(line)
            || directive::is_header(line)
    });

    let overall = if before_status == Status::Ok
        && after_status == Status::Ok
        && lost.is_empty()
        && unexpected.is_empty()
    {
        Status::Ok
    } else {
        Status::Nok
    };

    ComparisonResult {
        serial: serial.to_string(),
        header,
        before_missing,
        after_missing,
        before_status,
        after_status,
        lines_in_before_not_in_after: lost,
        unexpected_lines_in_after: unexpected,
        overall,
    }
}

struct Side {
    record: DeviceRecord,
    lines: Vec<String>,
}

fn side_record(dump: &ConfigDump, serial: &str) -> Option<Side> {
    let block = locate(dump, serial).ok()?;
    let record = extract(dump, &block);
    let lines = dump.span(block.start, block.end).to_vec();
    Some(Side { record, lines })
}

fn side_missing(side: &Option<Side>, required: &[DirectiveKind]) -> Vec<DirectiveKind> {
    match side {
        Some(side) => side.record.missing_from(required),
        None => required.to_vec(),
    }
}

fn status_of(missing: &[DirectiveKind]) -> Status {
    if missing.is_empty() {
        Status::Ok
    } else {
        Status::Nok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{load_checklist, Phase};
    use pretty_assertions::assert_eq;

    const BEFORE: &str = "\
gpon-onu 1/4/21
iphost 1 mode pppoe
iphost 1 pppoe username RCMG3A8848C4 password 20260121
iphost 1 vlan 2917
iphost 1 service mode route nat enable cos 0 portlist 1,2 ssidlist 1
iphost 1 service internet
iphost 2 mode dhcp
iphost 2 service management
quit
";

    const AFTER: &str = "\
gpon-onu 1/4/21
iphost 1 mode pppoe
iphost 1 pppoe username RCMG3A8848C4 password 20260121
iphost 1 vlan 2917
iphost 1 service mode route nat enable cos 0 portlist 1,2 ssidlist 1
iphost 1 service internet
iphost 2 mode dhcp
iphost 2 service management
iphost 2 vlan 2989
access-control http mode allowall
access-control https mode allowall
access-control telnet mode allowall
access-control ping mode allowall
quit
";

    fn checklists() -> CompareChecklists {
        CompareChecklists {
            before: load_checklist(Phase::Before, None),
            after: load_checklist(Phase::After, None),
        }
    }

    #[test]
    fn mgmt_vlan_gap_closes_between_runs() {
        let results = compare_dumps(
            BEFORE,
            AFTER,
            &["RCMG3A8848C4".to_string()],
            &checklists(),
        )
        .expect("compare");
        let result = &results[0];

        assert_eq!(result.before_status, Status::Nok);
        assert_eq!(result.before_missing, vec![DirectiveKind::MgmtVlan]);
        assert_eq!(result.after_status, Status::Ok);
        assert_eq!(result.lines_in_before_not_in_after, Vec::<String>::new());
        assert_eq!(result.unexpected_lines_in_after, Vec::<String>::new());
    }

    #[test]
    fn serial_absent_from_one_side_is_fully_missing_there() {
        let results = compare_dumps(
            "gpon-onu 9/9/9\niphost 1 pppoe username OTHER1234 password x\nquit\n",
            AFTER,
            &["RCMG3A8848C4".to_string()],
            &checklists(),
        )
        .expect("compare");
        let result = &results[0];

        assert_eq!(result.before_status, Status::Nok);
        assert_eq!(result.before_missing.len(), 8);
        assert_eq!(result.after_status, Status::Ok);
        assert_eq!(result.header, "gpon-onu 1/4/21");
    }

    #[test]
    fn dropped_primary_line_is_reported_as_lost() {
        let after = AFTER.replace("iphost 1 service internet\n", "");
        let results = compare_dumps(
            BEFORE,
            &after,
            &["RCMG3A8848C4".to_string()],
            &checklists(),
        )
        .expect("compare");
        let result = &results[0];

        assert_eq!(
            result.lines_in_before_not_in_after,
            vec!["iphost 1 service internet".to_string()]
        );
        assert_eq!(result.overall, Status::Nok);
    }

    #[test]
    fn drift_outside_the_allow_list_is_unexpected() {
        let after = AFTER.replace(
            "access-control ping mode allowall\n",
            "access-control ping mode allowall\niphost 1 vlan 2999\n",
        );
        let results = compare_dumps(
            BEFORE,
            &after,
            &["RCMG3A8848C4".to_string()],
            &checklists(),
        )
        .expect("compare");
        let result = &results[0];

        assert_eq!(
            result.unexpected_lines_in_after,
            vec!["iphost 1 vlan 2999".to_string()]
        );
        assert_eq!(result.overall, Status::Nok);
    }

    #[test]
    fn fully_compliant_sides_are_overall_ok() {
        let results =
            compare_dumps(AFTER, AFTER, &["RCMG3A8848C4".to_string()], &checklists())
                .expect("compare");
        assert_eq!(results[0].overall, Status::Ok);
    }

    #[test]
    fn blank_dump_fails_the_whole_comparison() {
        let err = compare_dumps("", AFTER, &["RCMG3A8848C4".to_string()], &checklists())
            .unwrap_err();
        assert_eq!(err, MigrateError::DumpNotProvided);
    }
}
