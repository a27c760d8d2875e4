use regex::Regex;
use serde::Serialize;

use crate::dump::ConfigDump;

/// Naming convention for versioned line profiles:
/// `<family><version>.<vlan>.<suffix>`, e.g. `NEWAP3.2917.ACS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileNaming {
    pub family: String,
    pub suffix: String,
}

impl Default for ProfileNaming {
    fn default() -> Self {
        Self {
            family: "NEWAP".to_string(),
            suffix: "ACS".to_string(),
        }
    }
}

/// A resolved profile name for one VLAN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileReference {
    pub name: String,
    pub family: String,
    pub version: u32,
    pub vlan: u32,
    pub suffix: String,
    /// True only when a profile definition declaring this exact name exists
    /// in the dump. An unconfirmed reference must block config generation:
    /// the device would silently fail on a profile the OLT does not carry.
    pub confirmed: bool,
}

/// Resolve the expected profile reference for `vlan`.
///
/// Collects every `<family><version>.<vlan>.<suffix>` occurrence in the dump
/// and keeps the maximum version; with no occurrence at all the reference is
/// constructed as version 1. A second pass marks the reference confirmed when
/// a `profile ...` definition line declares the exact name.
pub fn resolve_profile(dump: &ConfigDump, vlan: u32, naming: &ProfileNaming) -> ProfileReference {
    let reference = Regex::new(&format!(
        r"(?i)\b{}(\d+)\.{}\.{}\b",
        regex::escape(&naming.family),
        vlan,
        regex::escape(&naming.suffix)
    ))
    .expect("profile reference pattern is valid");

    let version = dump
        .lines()
        .iter()
        .flat_map(|line| reference.captures_iter(line))
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .max()
        .unwrap_or(1);

    let name = format!("{}{}.{}.{}", naming.family, version, vlan, naming.suffix);
    let confirmed = has_definition(dump, &name);

    ProfileReference {
        name,
        family: naming.family.clone(),
        version,
        vlan,
        suffix: naming.suffix.clone(),
        confirmed,
    }
}

/// A definition is a line opening a `profile ...` stanza that carries the
/// exact name. Bare references (`line-profile-id <name>`) never confirm.
fn has_definition(dump: &ConfigDump, name: &str) -> bool {
    let definition = Regex::new(&format!(
        r"(?i)^\s*profile\s+.*\b{}\b",
        regex::escape(name)
    ))
    .expect("profile definition pattern is valid");
    dump.lines().iter().any(|line| definition.is_match(line))
}
