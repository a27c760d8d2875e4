use std::collections::BTreeSet;

use serde::Serialize;

use crate::directive::{
    credential_pair, is_primary_line, is_secondary_line, vlan_value, DirectiveKind,
    CANONICAL_ORDER,
};
use crate::dump::{ConfigDump, OnuAddress};
use crate::locate::DeviceBlock;

/// Structured facts derived from one [`DeviceBlock`]. Recomputed fresh on
/// every invocation; a fix produces new text, never an edit of the dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceRecord {
    /// Username token of the credential-setting line, which doubles as the
    /// ONU serial in this dialect.
    pub serial: Option<String>,
    pub address: OnuAddress,
    /// First vlan-assignment directive in the block; later duplicates are
    /// ignored.
    pub vlan: Option<u32>,
    pub present: BTreeSet<DirectiveKind>,
    /// Verbatim `iphost 1` family lines, in original order.
    pub primary_lines: Vec<String>,
    /// Verbatim management-host and access-control lines, in original order.
    /// Kept so re-synthesis never drops a directive that was present.
    pub secondary_lines: Vec<String>,
}

impl DeviceRecord {
    /// Required directives not present in this record, in canonical order.
    pub fn missing_from(&self, required: &[DirectiveKind]) -> Vec<DirectiveKind> {
        CANONICAL_ORDER
            .iter()
            .copied()
            .filter(|kind| required.contains(kind) && !self.present.contains(kind))
            .collect()
    }
}

/// Derive a [`DeviceRecord`] from a located block.
///
/// Presence is decided per [`DirectiveKind`] by independent pattern tests
/// over every block line, so a directive counts as present even when it sits
/// outside the primary group. Partial matches never count.
pub fn extract(dump: &ConfigDump, block: &DeviceBlock) -> DeviceRecord {
    let lines = dump.span(block.start, block.end);

    let mut present = BTreeSet::new();
    for kind in CANONICAL_ORDER {
        if lines.iter().any(|line| kind.matches(line)) {
            present.insert(kind);
        }
    }

    let serial = lines
        .iter()
        .find_map(|line| credential_pair(line))
        .map(|(username, _)| username);
    let vlan = lines.iter().find_map(|line| vlan_value(line));

    let primary_lines = lines
        .iter()
        .filter(|line| is_primary_line(line))
        .map(|line| line.trim().to_string())
        .collect();
    let secondary_lines = lines
        .iter()
        .filter(|line| is_secondary_line(line))
        .map(|line| line.trim().to_string())
        .collect();

    DeviceRecord {
        serial,
        address: block.address,
        vlan,
        present,
        primary_lines,
        secondary_lines,
    }
}
