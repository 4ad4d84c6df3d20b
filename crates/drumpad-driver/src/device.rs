use drumpad_gamepad::DeviceDescriptor;
use log::{debug, info, warn};

use crate::config::DriverConfig;
use crate::driver::{DrumDriver, DESCRIPTOR};
use crate::error::{Error, Result};
use crate::hits::HitTransition;
use crate::report::RawReport;
use crate::session::DeviceSession;
use crate::trace::ReportTrace;
use crate::transport::{
    Completion, ControlRequest, Host, TransferId, TransferStatus, Transport,
};

/// Connection lifecycle of a drum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// Matched by probe, not yet initialized.
    Probed,
    /// Descriptor bound, session zeroed, handshake timer armed.
    Initialized,
    /// Handshake control read is in flight.
    AwaitingHandshake,
    /// Interrupt reads are being chained.
    Polling,
    /// Terminal.
    Disconnected,
}

/// One connected drum.
///
/// Every entry point takes `&mut self`; the host calls them one at a time.
/// While polling, each interrupt completion submits the next read before
/// returning, so exactly one read is outstanding until disconnect or a
/// transport refusal.
pub struct DrumDevice<T: Transport, H: Host> {
    transport: T,
    host: H,
    config: DriverConfig,
    state: LifecycleState,
    descriptor: Option<&'static DeviceDescriptor>,
    session: Option<DeviceSession>,
    trace: ReportTrace,
    pending_read: Option<TransferId>,
    pending_control: Option<TransferId>,
}

impl<T: Transport, H: Host> DrumDevice<T, H> {
    /// Create a device in the `Probed` state. Prefer [`DrumDriver::attach`],
    /// which checks the ids first.
    pub fn new(transport: T, host: H, config: DriverConfig) -> Self {
        Self {
            transport,
            host,
            config,
            state: LifecycleState::Probed,
            descriptor: None,
            session: None,
            trace: ReportTrace::new(),
            pending_read: None,
            pending_control: None,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Bound descriptor, available from `Initialized` on.
    pub fn descriptor(&self) -> Option<&'static DeviceDescriptor> {
        self.descriptor
    }

    pub fn session(&self) -> Option<&DeviceSession> {
        self.session.as_ref()
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// The interrupt read currently in flight.
    pub fn pending_read(&self) -> Option<TransferId> {
        self.pending_read
    }

    /// The handshake control read currently in flight.
    pub fn pending_control(&self) -> Option<TransferId> {
        self.pending_control
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_parts(self) -> (T, H) {
        (self.transport, self.host)
    }

    /// Bind the descriptor, zero the session and arm the handshake timer.
    pub fn init(&mut self, vendor_id: u16, product_id: u16) -> Result<()> {
        self.expect_state("init", LifecycleState::Probed)?;
        if !DrumDriver::probe(vendor_id, product_id) {
            return Err(Error::Unsupported {
                vid: vendor_id,
                pid: product_id,
            });
        }

        self.descriptor = Some(&DESCRIPTOR);
        self.session = Some(DeviceSession::new());
        self.host.set_timer(self.config.handshake_delay);
        self.state = LifecycleState::Initialized;
        info!(
            "{} initialized - vid=0x{vendor_id:04x} pid=0x{product_id:04x}, handshake in {}ms",
            DrumDriver::NAME,
            self.config.handshake_delay.as_millis()
        );
        Ok(())
    }

    /// Send the handshake query. If the transport refuses it, polling starts
    /// right away instead.
    pub fn on_timer_fire(&mut self) -> Result<()> {
        self.expect_state("on_timer_fire", LifecycleState::Initialized)?;

        match self
            .transport
            .submit_control_in(ControlRequest::get_input_report(0))
        {
            Ok(id) => {
                self.pending_control = Some(id);
                self.state = LifecycleState::AwaitingHandshake;
                Ok(())
            }
            Err(err) => {
                warn!("failed to issue handshake transfer: {err}");
                self.state = LifecycleState::Polling;
                self.request_data()
            }
        }
    }

    /// Handshake finished. The outcome is only logged; polling starts either way.
    pub fn on_control_complete(
        &mut self,
        id: TransferId,
        status: TransferStatus,
    ) -> Result<()> {
        if self.state == LifecycleState::Disconnected {
            debug!("dropping handshake completion {id} after disconnect");
            return Ok(());
        }
        self.expect_state("on_control_complete", LifecycleState::AwaitingHandshake)?;
        if self.pending_control != Some(id) {
            return Err(Error::UnexpectedTransfer {
                expected: self.pending_control,
                actual: id,
            });
        }
        self.pending_control = None;

        if status.is_completed() {
            info!("handshake completed");
        } else {
            warn!("handshake failed with status {status:?}, polling anyway");
        }

        self.state = LifecycleState::Polling;
        self.request_data()
    }

    /// Process one interrupt read and submit the next one.
    ///
    /// Non-success statuses and short frames are skipped without reporting,
    /// but still re-arm the read.
    pub fn on_interrupt_complete(&mut self, completion: Completion<'_>) -> Result<()> {
        if self.state == LifecycleState::Disconnected {
            debug!("dropping interrupt completion {} after disconnect", completion.id);
            return Ok(());
        }
        self.expect_state("on_interrupt_complete", LifecycleState::Polling)?;
        if self.pending_read != Some(completion.id) {
            return Err(Error::UnexpectedTransfer {
                expected: self.pending_read,
                actual: completion.id,
            });
        }
        self.pending_read = None;

        if self.config.trace_reports {
            self.trace.observe(completion.status, completion.data);
        }

        if completion.status.is_completed() {
            self.decode_and_report(completion.data);
        } else {
            debug!(
                "interrupt transfer {} finished with status {:?}",
                completion.id, completion.status
            );
        }

        self.request_data()
    }

    /// Re-arm polling after the transport refused a read.
    pub fn resume_polling(&mut self) -> Result<()> {
        self.expect_state("resume_polling", LifecycleState::Polling)?;
        if self.pending_read.is_some() {
            return Err(Error::InvalidState {
                op: "resume_polling",
                state: self.state,
            });
        }
        self.request_data()
    }

    /// Host notification that the device is gone. Transfers still in flight
    /// are the transport's to cancel; their completions are dropped.
    pub fn on_disconnect(&mut self) -> Result<()> {
        if self.state == LifecycleState::Disconnected {
            return Ok(());
        }
        info!("{} disconnected", DrumDriver::NAME);
        self.state = LifecycleState::Disconnected;
        self.session = None;
        self.pending_read = None;
        self.pending_control = None;
        Ok(())
    }

    fn decode_and_report(&mut self, data: &[u8]) {
        let Some(report) = RawReport::parse(data) else {
            return;
        };
        if self.config.strict_header && !report.has_expected_header() {
            debug!(
                "discarding report with header {:02x} {:02x}",
                report.msg_type, report.msg_size
            );
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let decoded = session.apply(&report);
        if decoded.left == HitTransition::Released {
            debug!("left side/rim released");
        }
        if decoded.right == HitTransition::Released {
            debug!("right side/rim released");
        }
        self.host.report_input(&decoded.state);
    }

    fn request_data(&mut self) -> Result<()> {
        match self
            .transport
            .submit_interrupt_in(self.config.interrupt_endpoint)
        {
            Ok(id) => {
                self.pending_read = Some(id);
                Ok(())
            }
            Err(err) => {
                warn!("failed to issue interrupt transfer: {err}");
                Err(err.into())
            }
        }
    }

    fn expect_state(&self, op: &'static str, expected: LifecycleState) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(Error::InvalidState {
                op,
                state: self.state,
            })
        }
    }
}
