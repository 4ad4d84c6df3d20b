//! Recording doubles for the transport and host.

use std::time::Duration;

use drumpad_gamepad::GamepadState;

use crate::error::TransportError;
use crate::transport::{ControlRequest, Endpoint, Host, TransferId, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Submission {
    Interrupt(Endpoint),
    Control(ControlRequest),
}

#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    pub(crate) submissions: Vec<Submission>,
    pub(crate) refuse_interrupt: bool,
    pub(crate) refuse_control: bool,
    next_id: u32,
}

impl ScriptedTransport {
    pub(crate) fn interrupt_reads(&self) -> usize {
        self.submissions
            .iter()
            .filter(|s| matches!(s, Submission::Interrupt(_)))
            .count()
    }

    fn next_id(&mut self) -> TransferId {
        self.next_id += 1;
        TransferId(self.next_id)
    }
}

impl Transport for ScriptedTransport {
    fn submit_interrupt_in(
        &mut self,
        endpoint: Endpoint,
    ) -> Result<TransferId, TransportError> {
        if self.refuse_interrupt {
            return Err(TransportError::NoResources);
        }
        self.submissions.push(Submission::Interrupt(endpoint));
        Ok(self.next_id())
    }

    fn submit_control_in(
        &mut self,
        request: ControlRequest,
    ) -> Result<TransferId, TransportError> {
        if self.refuse_control {
            return Err(TransportError::NoResources);
        }
        self.submissions.push(Submission::Control(request));
        Ok(self.next_id())
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub(crate) timers: Vec<Duration>,
    pub(crate) reports: Vec<GamepadState>,
}

impl Host for RecordingHost {
    fn set_timer(&mut self, delay: Duration) {
        self.timers.push(delay);
    }

    fn report_input(&mut self, state: &GamepadState) {
        self.reports.push(*state);
    }
}
