//! Directive patterns for the Raisecom GPON CLI dialect.
//!
//! Every directive role the extractor cares about is a [`DirectiveKind`]
//! variant with its own line pattern. Extraction logic only asks "does this
//! line fulfil that role" through these predicates, so adding a dialect means
//! touching this module and nothing else.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dump::OnuAddress;

/// One semantic configuration role, matchable as a single line shape.
/// Multi-line directives are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectiveKind {
    /// `iphost 1 mode pppoe`
    Mode,
    /// `iphost 1 pppoe username <sn> password <pw>`
    Credentials,
    /// `iphost 1 vlan <vlan>`
    Vlan,
    /// `iphost 1 service internet`
    ServiceInternet,
    /// `iphost 1 service mode route nat enable ...`
    ServiceRoute,
    /// `iphost 2 mode dhcp`
    MgmtMode,
    /// `iphost 2 service management`
    MgmtService,
    /// `iphost 2 vlan 2989`
    MgmtVlan,
    /// `access-control http mode allowall`
    AccessHttp,
    /// `access-control https mode allowall`
    AccessHttps,
    /// `access-control telnet mode allowall`
    AccessTelnet,
    /// `access-control ping mode allowall`
    AccessPing,
}

/// Fixed synthesis order for patched directives: primary host first, then the
/// management host triple, then the access-control group.
pub const CANONICAL_ORDER: [DirectiveKind; 12] = [
    DirectiveKind::Mode,
    DirectiveKind::Credentials,
    DirectiveKind::Vlan,
    DirectiveKind::ServiceInternet,
    DirectiveKind::ServiceRoute,
    DirectiveKind::MgmtMode,
    DirectiveKind::MgmtService,
    DirectiveKind::MgmtVlan,
    DirectiveKind::AccessHttp,
    DirectiveKind::AccessHttps,
    DirectiveKind::AccessTelnet,
    DirectiveKind::AccessPing,
];

lazy_static! {
    static ref MODE_RE: Regex = Regex::new(r"(?i)^\s*iphost\s+1\s+mode\s+\S+").unwrap();
    static ref CREDENTIALS_RE: Regex =
        Regex::new(r"(?i)^\s*iphost\s+1\s+pppoe\s+username\s+(\S+)\s+password\s+(\S+)").unwrap();
    static ref VLAN_RE: Regex = Regex::new(r"(?i)^\s*iphost\s+1\s+vlan\s+(\d+)\s*$").unwrap();
    static ref SERVICE_INTERNET_RE: Regex =
        Regex::new(r"(?i)^\s*iphost\s+1\s+service\s+internet\s*$").unwrap();
    static ref SERVICE_ROUTE_RE: Regex =
        Regex::new(r"(?i)^\s*iphost\s+1\s+service\s+mode\s+route\b").unwrap();
    static ref MGMT_MODE_RE: Regex = Regex::new(r"(?i)^\s*iphost\s+2\s+mode\s+\S+").unwrap();
    static ref MGMT_SERVICE_RE: Regex =
        Regex::new(r"(?i)^\s*iphost\s+2\s+service\s+management\s*$").unwrap();
    static ref MGMT_VLAN_RE: Regex = Regex::new(r"(?i)^\s*iphost\s+2\s+vlan\s+\d+\s*$").unwrap();
    static ref ACCESS_HTTP_RE: Regex =
        Regex::new(r"(?i)^\s*access-control\s+http\s+mode\s+\S+").unwrap();
    static ref ACCESS_HTTPS_RE: Regex =
        Regex::new(r"(?i)^\s*access-control\s+https\s+mode\s+\S+").unwrap();
    static ref ACCESS_TELNET_RE: Regex =
        Regex::new(r"(?i)^\s*access-control\s+telnet\s+mode\s+\S+").unwrap();
    static ref ACCESS_PING_RE: Regex =
        Regex::new(r"(?i)^\s*access-control\s+ping\s+mode\s+\S+").unwrap();
    static ref HEADER_RE: Regex = Regex::new(
        r"(?i)^\s*(?:create\s+)?(?:int(?:erface)?\s+)?gpon-onu\s+(\d+)/(\d+)/(\d+)\s*$"
    )
    .unwrap();
    static ref TERMINATOR_RE: Regex = Regex::new(r"(?i)^\s*(?:quit|end)\s*$").unwrap();
    static ref PRIMARY_FAMILY_RE: Regex =
        Regex::new(r"(?i)^\s*iphost\s+1\s+(?:mode|pppoe|vlan|service)\b").unwrap();
}

impl DirectiveKind {
    /// The line pattern that establishes presence of this directive.
    pub fn pattern(self) -> &'static Regex {
        match self {
            DirectiveKind::Mode => &MODE_RE,
            DirectiveKind::Credentials => &CREDENTIALS_RE,
            DirectiveKind::Vlan => &VLAN_RE,
            DirectiveKind::ServiceInternet => &SERVICE_INTERNET_RE,
            DirectiveKind::ServiceRoute => &SERVICE_ROUTE_RE,
            DirectiveKind::MgmtMode => &MGMT_MODE_RE,
            DirectiveKind::MgmtService => &MGMT_SERVICE_RE,
            DirectiveKind::MgmtVlan => &MGMT_VLAN_RE,
            DirectiveKind::AccessHttp => &ACCESS_HTTP_RE,
            DirectiveKind::AccessHttps => &ACCESS_HTTPS_RE,
            DirectiveKind::AccessTelnet => &ACCESS_TELNET_RE,
            DirectiveKind::AccessPing => &ACCESS_PING_RE,
        }
    }

    pub fn matches(self, line: &str) -> bool {
        self.pattern().is_match(line)
    }

    /// Stable identifier used in checklists and reports.
    pub fn id(self) -> &'static str {
        match self {
            DirectiveKind::Mode => "mode",
            DirectiveKind::Credentials => "credentials",
            DirectiveKind::Vlan => "vlan",
            DirectiveKind::ServiceInternet => "service-internet",
            DirectiveKind::ServiceRoute => "service-route",
            DirectiveKind::MgmtMode => "mgmt-mode",
            DirectiveKind::MgmtService => "mgmt-service",
            DirectiveKind::MgmtVlan => "mgmt-vlan",
            DirectiveKind::AccessHttp => "access-http",
            DirectiveKind::AccessHttps => "access-https",
            DirectiveKind::AccessTelnet => "access-telnet",
            DirectiveKind::AccessPing => "access-ping",
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DirectiveKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CANONICAL_ORDER
            .iter()
            .copied()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| format!("unknown directive kind '{s}'"))
    }
}

/// Parse a device-header line (`[create|interface|int] gpon-onu s/p/o`).
pub fn parse_header(line: &str) -> Option<OnuAddress> {
    let caps = HEADER_RE.captures(line)?;
    Some(OnuAddress {
        slot: caps[1].parse().ok()?,
        port: caps[2].parse().ok()?,
        ont_id: caps[3].parse().ok()?,
    })
}

pub fn is_header(line: &str) -> bool {
    HEADER_RE.is_match(line)
}

/// A line consisting of exactly a block terminator token.
pub fn is_terminator(line: &str) -> bool {
    TERMINATOR_RE.is_match(line)
}

/// A line belonging to the primary (`iphost 1`) directive family.
pub fn is_primary_line(line: &str) -> bool {
    PRIMARY_FAMILY_RE.is_match(line)
}

/// A line belonging to the management-host or access-control group.
pub fn is_secondary_line(line: &str) -> bool {
    [
        DirectiveKind::MgmtMode,
        DirectiveKind::MgmtService,
        DirectiveKind::MgmtVlan,
        DirectiveKind::AccessHttp,
        DirectiveKind::AccessHttps,
        DirectiveKind::AccessTelnet,
        DirectiveKind::AccessPing,
    ]
    .iter()
    .any(|kind| kind.matches(line))
}

/// Username/password pair from a credential-setting line.
pub fn credential_pair(line: &str) -> Option<(String, String)> {
    let caps = CREDENTIALS_RE.captures(line)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

/// VLAN id from a vlan-assignment line.
pub fn vlan_value(line: &str) -> Option<u32> {
    VLAN_RE.captures(line).and_then(|caps| caps[1].parse().ok())
}

/// True when `line` is a credential-setting directive carrying `serial` as a
/// whole-word token, case-insensitively.
pub fn credential_line_for_serial(line: &str, serial: &str) -> bool {
    if !CREDENTIALS_RE.is_match(line) {
        return false;
    }
    let word = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(serial)))
        .expect("escaped serial is a valid pattern");
    word.is_match(line)
}
