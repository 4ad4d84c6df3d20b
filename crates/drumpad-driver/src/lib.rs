//! Driver for the IINE Pro Max taiko drum (USB `056e:2004`).
//!
//! The drum speaks an Xbox 360 style 20-byte input report. The driver maps it
//! onto the abstract gamepad from `drumpad-gamepad`: drum face and face buttons
//! become South/East/West/North, and the two rim sensors become trigger axes
//! plus a shoulder press per hit.
//!
//! The driver does no I/O of its own. A host owns the USB transport and calls
//! into a [`DrumDevice`] as transfers and timers complete:
//!
//! ```text
//! attach -> init -> (timer) -> handshake -> interrupt read -> ... -> disconnect
//! ```

mod buttons;
mod config;
mod device;
mod driver;
mod error;
mod hits;
mod report;
mod session;
mod trace;
mod transport;

#[cfg(test)]
mod testing;

pub use crate::buttons::{map_buttons, NativeButton};
pub use crate::config::{DriverConfig, DEFAULT_HANDSHAKE_DELAY, DEFAULT_INTERRUPT_ENDPOINT};
pub use crate::device::{DrumDevice, LifecycleState};
pub use crate::driver::{DrumDriver, COMPATIBLE, DESCRIPTOR, PRODUCT_ID, VENDOR_ID};
pub use crate::error::{Error, Result, TransportError};
pub use crate::hits::{scale, HitChannel, HitTransition, Side};
pub use crate::report::{RawReport, MSG_SIZE, MSG_TYPE_INPUT, REPORT_LEN};
pub use crate::session::{Decoded, DeviceSession};
pub use crate::trace::{ReportTrace, TraceEntry, IDLE_PATTERNS};
pub use crate::transport::{
    Completion, ControlRequest, Endpoint, Host, TransferId, TransferStatus, Transport,
};
