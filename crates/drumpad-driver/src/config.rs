use std::time::Duration;

use crate::transport::Endpoint;

/// Delay between init and the handshake request.
pub const DEFAULT_HANDSHAKE_DELAY: Duration = Duration::from_millis(500);
/// Interrupt IN endpoint the drum reports on.
pub const DEFAULT_INTERRUPT_ENDPOINT: Endpoint = Endpoint::input(1);

/// Tunables of a [`DrumDevice`](crate::DrumDevice).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub handshake_delay: Duration,
    pub interrupt_endpoint: Endpoint,
    /// Discard reports whose type/size header is not `00 14`.
    pub strict_header: bool,
    /// Log changed, non-idle reports at debug level.
    pub trace_reports: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            handshake_delay: DEFAULT_HANDSHAKE_DELAY,
            interrupt_endpoint: DEFAULT_INTERRUPT_ENDPOINT,
            strict_header: false,
            trace_reports: true,
        }
    }
}
