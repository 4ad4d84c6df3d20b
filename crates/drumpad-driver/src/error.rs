use thiserror::Error;

use crate::device::LifecycleState;
use crate::transport::TransferId;

/// Failure to hand a transfer to the USB transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The transport has no free transfer slots.
    #[error("no transfer resources available")]
    NoResources,
    /// The device is gone from the bus.
    #[error("device is not connected")]
    NotConnected,
    /// A generic backend error.
    #[error("transport backend error: {0}")]
    Backend(String),
}

/// Error type for driver lifecycle operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The vendor/product pair is not handled by this driver.
    #[error("unsupported device: vid=0x{vid:04x} pid=0x{pid:04x}")]
    Unsupported { vid: u16, pid: u16 },
    /// An entry point was called in a state that does not accept it.
    #[error("{op} is not valid in state {state:?}")]
    InvalidState {
        op: &'static str,
        state: LifecycleState,
    },
    /// A completion arrived for a transfer the device is not waiting on.
    #[error("unexpected transfer completion: expected {expected:?}, got {actual}")]
    UnexpectedTransfer {
        expected: Option<TransferId>,
        actual: TransferId,
    },
    /// The transport refused a transfer.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Convenient result alias for driver operations.
pub type Result<T> = std::result::Result<T, Error>;
