use std::thread;
use std::time::Duration;

use ahash::AHashMap;
use crossbeam_channel::{unbounded, Receiver, Sender};
use drumpad_driver::{
    Completion, ControlRequest, DriverConfig, DrumDevice, DrumDriver, Endpoint, Host,
    TransferId, TransferStatus, Transport, TransportError, PRODUCT_ID, VENDOR_ID,
};
use drumpad_gamepad::{Axis, GamepadState};
use thiserror::Error;

use crate::capture::{CaptureError, CaptureFrame};

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("driver error: {0}")]
    Driver(#[from] drumpad_driver::Error),
    #[error("capture error: {0}")]
    Capture(#[from] CaptureError),
    #[error("driver did not arm the handshake timer")]
    TimerNotArmed,
    #[error("completion for unknown transfer {0}")]
    UnknownTransfer(TransferId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    Interrupt(Endpoint),
    Control(ControlRequest),
}

/// Transport that queues every submission; the replay loop completes them
/// in order.
pub struct ReplayTransport {
    next_id: u32,
    pending: AHashMap<TransferId, Pending>,
    submitted: Sender<TransferId>,
}

impl ReplayTransport {
    fn new(submitted: Sender<TransferId>) -> Self {
        Self {
            next_id: 0,
            pending: AHashMap::new(),
            submitted,
        }
    }

    fn submit(&mut self, kind: Pending) -> Result<TransferId, TransportError> {
        self.next_id += 1;
        let id = TransferId(self.next_id);
        self.submitted
            .send(id)
            .map_err(|_| TransportError::NotConnected)?;
        self.pending.insert(id, kind);
        Ok(id)
    }

    /// Transfers submitted and not yet completed.
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }
}

impl Transport for ReplayTransport {
    fn submit_interrupt_in(&mut self, endpoint: Endpoint) -> Result<TransferId, TransportError> {
        self.submit(Pending::Interrupt(endpoint))
    }

    fn submit_control_in(&mut self, request: ControlRequest) -> Result<TransferId, TransportError> {
        self.submit(Pending::Control(request))
    }
}

/// Host that forwards reported states to the replay loop.
pub struct ReplayHost {
    timer: Option<Duration>,
    states: Sender<GamepadState>,
}

impl Host for ReplayHost {
    fn set_timer(&mut self, delay: Duration) {
        self.timer = Some(delay);
    }

    fn report_input(&mut self, state: &GamepadState) {
        // receiver lives as long as the replay
        let _ = self.states.send(*state);
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Capture frames delivered as interrupt completions.
    pub frames: usize,
    /// States the driver reported.
    pub reports: usize,
    pub handshakes: usize,
}

/// Drives one device through its whole lifecycle from a capture.
pub struct Replay {
    device: DrumDevice<ReplayTransport, ReplayHost>,
    submitted: Receiver<TransferId>,
    states: Receiver<GamepadState>,
    realtime: bool,
}

impl Replay {
    pub fn new(config: DriverConfig) -> Result<Self, ReplayError> {
        let (submitted_tx, submitted_rx) = unbounded();
        let (states_tx, states_rx) = unbounded();
        let host = ReplayHost {
            timer: None,
            states: states_tx,
        };
        let device = DrumDriver::attach(
            VENDOR_ID,
            PRODUCT_ID,
            ReplayTransport::new(submitted_tx),
            host,
            config,
        )
        .ok_or(drumpad_driver::Error::Unsupported {
            vid: VENDOR_ID,
            pid: PRODUCT_ID,
        })?;
        Ok(Self {
            device,
            submitted: submitted_rx,
            states: states_rx,
            realtime: false,
        })
    }

    /// Sleep for the handshake delay instead of firing the timer at once.
    pub fn realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    pub fn device(&self) -> &DrumDevice<ReplayTransport, ReplayHost> {
        &self.device
    }

    /// Run init, handshake and polling over `frames`, then disconnect.
    /// Every reported state is passed to `sink`.
    pub fn run_with<I, F>(&mut self, frames: I, mut sink: F) -> Result<ReplaySummary, ReplayError>
    where
        I: IntoIterator<Item = CaptureFrame>,
        F: FnMut(&GamepadState),
    {
        let mut frames = frames.into_iter();
        let mut summary = ReplaySummary::default();

        self.device.init(VENDOR_ID, PRODUCT_ID)?;
        let delay = self
            .device
            .host_mut()
            .timer
            .take()
            .ok_or(ReplayError::TimerNotArmed)?;
        if self.realtime {
            thread::sleep(delay);
        }
        self.device.on_timer_fire()?;

        while let Ok(id) = self.submitted.try_recv() {
            let kind = self
                .device
                .transport_mut()
                .pending
                .remove(&id)
                .ok_or(ReplayError::UnknownTransfer(id))?;
            match kind {
                Pending::Control(_) => {
                    self.device
                        .on_control_complete(id, TransferStatus::Completed)?;
                    summary.handshakes += 1;
                }
                Pending::Interrupt(_) => {
                    let Some(frame) = frames.next() else {
                        // put it back, the disconnect cancels it
                        self.device.transport_mut().pending.insert(id, kind);
                        break;
                    };
                    summary.frames += 1;
                    self.device.on_interrupt_complete(Completion {
                        id,
                        status: frame.status,
                        data: &frame.data,
                    })?;
                }
            }
            for state in self.states.try_iter() {
                summary.reports += 1;
                sink(&state);
            }
        }

        self.device.on_disconnect()?;
        self.cancel_in_flight()?;
        Ok(summary)
    }

    /// Complete leftover transfers as cancelled, the way a host does on unplug.
    fn cancel_in_flight(&mut self) -> Result<(), ReplayError> {
        let ids: Vec<TransferId> = self.device.transport().pending.keys().copied().collect();
        for id in ids {
            let kind = self.device.transport_mut().pending.remove(&id);
            match kind {
                Some(Pending::Interrupt(_)) => self.device.on_interrupt_complete(Completion {
                    id,
                    status: TransferStatus::Cancelled,
                    data: &[],
                })?,
                Some(Pending::Control(_)) => self
                    .device
                    .on_control_complete(id, TransferStatus::Cancelled)?,
                None => {}
            }
        }
        while self.submitted.try_recv().is_ok() {}
        Ok(())
    }
}

/// One-line rendering of a reported state.
pub fn format_state(state: &GamepadState) -> String {
    format!(
        "buttons={:?} left_trigger={} right_trigger={}",
        state.buttons(),
        state.axis(Axis::LeftTrigger),
        state.axis(Axis::RightTrigger)
    )
}
