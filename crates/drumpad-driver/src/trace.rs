//! Diagnostic logging of incoming reports.

use log::debug;
use smallvec::SmallVec;

use crate::report::{RawReport, REPORT_LEN};
use crate::transport::TransferStatus;

/// Steady-state frames the drum sends while untouched.
pub const IDLE_PATTERNS: [[u8; REPORT_LEN]; 2] = [
    [
        0x00, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00,
        0x00, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0x00, 0x14, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00,
        0x00, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
];

/// What the trace found notable in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceEntry {
    pub buttons: Option<u16>,
    pub left_hit: Option<u8>,
    pub right_hit: Option<u8>,
}

impl TraceEntry {
    fn is_empty(&self) -> bool {
        self.buttons.is_none() && self.left_hit.is_none() && self.right_hit.is_none()
    }
}

/// Logs frames that differ from the previous one and carry input.
///
/// Owned by the device; starts empty so the first frame is always examined.
#[derive(Debug, Default)]
pub struct ReportTrace {
    previous: SmallVec<[u8; 64]>,
    primed: bool,
}

impl ReportTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `data` starts with one of the known idle frames.
    pub fn is_idle_pattern(data: &[u8]) -> bool {
        let Some(head) = data.get(..REPORT_LEN) else {
            return false;
        };
        IDLE_PATTERNS.iter().any(|pattern| head == pattern.as_slice())
    }

    /// Examine a completed transfer. Returns the logged entry, if any.
    pub fn observe(&mut self, status: TransferStatus, data: &[u8]) -> Option<TraceEntry> {
        if !status.is_completed() || data.is_empty() {
            return None;
        }
        if self.primed && self.previous.as_slice() == data {
            return None;
        }
        self.previous.clear();
        self.previous.extend_from_slice(data);
        self.primed = true;

        if Self::is_idle_pattern(data) {
            return None;
        }
        let report = RawReport::parse(data)?;
        let entry = TraceEntry {
            buttons: (report.buttons != 0).then_some(report.buttons),
            left_hit: (report.left_hit > 0).then_some(report.left_hit),
            right_hit: (report.right_hit > 0).then_some(report.right_hit),
        };
        if entry.is_empty() {
            return None;
        }

        if let Some(buttons) = entry.buttons {
            debug!("button input: buttons=0x{buttons:04x}");
        }
        if let Some(hit) = entry.left_hit {
            debug!("left side/rim hit: intensity={hit} (0x{hit:02x})");
        }
        if let Some(hit) = entry.right_hit {
            debug!("right side/rim hit: intensity={hit} (0x{hit:02x})");
        }
        Some(entry)
    }
}
