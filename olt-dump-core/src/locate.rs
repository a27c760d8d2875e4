use serde::Serialize;
use thiserror::Error;

use crate::directive::{credential_line_for_serial, is_header, is_terminator, parse_header};
use crate::dump::{ConfigDump, OnuAddress};

/// Errors from the block locator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocateError {
    /// No credential-setting line in the dump carries the serial.
    #[error("serial not found in dump")]
    SerialNotInDump(String),
    /// The serial's credential line has no preceding device header.
    #[error("no device header precedes the credential line")]
    HeaderNotFound(String),
}

/// A contiguous slice of a dump describing one ONU. `start`/`end` are
/// inclusive line indexes; `start` is always the device-header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceBlock {
    pub start: usize,
    pub end: usize,
    pub address: OnuAddress,
    /// Set when the block had to be closed at end-of-dump because neither a
    /// terminator nor a following header exists. Truncated pastes still yield
    /// a best-effort block, but callers must surface the flag.
    pub low_confidence: bool,
}

/// Locate the configuration block belonging to `serial`.
///
/// Scans top-to-bottom for the credential line embedding the serial as a
/// whole-word token, then backward for the nearest device header and forward
/// for the nearest terminator. Without a terminator the block ends on the
/// line before the next device header, or at end-of-dump (flagged).
pub fn locate(dump: &ConfigDump, serial: &str) -> Result<DeviceBlock, LocateError> {
    let lines = dump.lines();
    let hit = lines
        .iter()
        .position(|line| credential_line_for_serial(line, serial))
        .ok_or_else(|| LocateError::SerialNotInDump(serial.to_string()))?;

    let (start, address) = lines[..hit]
        .iter()
        .enumerate()
        .rev()
        .find_map(|(idx, line)| parse_header(line).map(|addr| (idx, addr)))
        .ok_or_else(|| LocateError::HeaderNotFound(serial.to_string()))?;

    // Forward scan stops at the next device header: a terminator past it
    // belongs to another block, and blocks never overlap.
    for (idx, line) in lines.iter().enumerate().skip(hit + 1) {
        if is_terminator(line) {
            return Ok(DeviceBlock {
                start,
                end: idx,
                address,
                low_confidence: false,
            });
        }
        if is_header(line) {
            return Ok(DeviceBlock {
                start,
                end: idx - 1,
                address,
                low_confidence: false,
            });
        }
    }

    Ok(DeviceBlock {
        start,
        end: lines.len() - 1,
        address,
        low_confidence: true,
    })
}
