use std::fmt;

use serde::{Deserialize, Serialize};

/// An entire OLT running configuration, held as a flat ordered sequence of
/// lines. The dump is never validated as a full grammar; every consumer works
/// on line spans and per-line pattern matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDump {
    lines: Vec<String>,
}

impl ConfigDump {
    /// Split raw dump text into lines, preserving original line content.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(ToOwned::to_owned).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True when the dump carries no non-blank line at all.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    /// Inclusive line span as a slice. Out-of-range spans are clamped.
    pub fn span(&self, start: usize, end: usize) -> &[String] {
        let end = end.min(self.lines.len().saturating_sub(1));
        if start > end || self.lines.is_empty() {
            return &[];
        }
        &self.lines[start..=end]
    }
}

/// The 3-part numeric address of an ONU on its OLT: slot/port/ont-id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnuAddress {
    pub slot: u32,
    pub port: u32,
    pub ont_id: u32,
}

impl fmt::Display for OnuAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.slot, self.port, self.ont_id)
    }
}
