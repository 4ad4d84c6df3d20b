//! Boundary between the driver and its host.
//!
//! The driver never owns endpoints or schedules transfers itself. It asks a
//! [`Transport`] to queue reads and is told about their completion through the
//! `on_*` methods of [`DrumDevice`](crate::DrumDevice). Timers and the input
//! sink belong to the [`Host`].

use std::fmt;
use std::time::Duration;

use drumpad_gamepad::GamepadState;

use crate::error::TransportError;

/// Direction bit of an endpoint address.
pub const ENDPOINT_IN: u8 = 0x80;

/// `bmRequestType` direction: device to host.
pub const CTRLTYPE_DIR_DEVICE2HOST: u8 = 0x80;
/// `bmRequestType` type: class request.
pub const CTRLTYPE_TYPE_CLASS: u8 = 0x20;
/// `bmRequestType` recipient: interface.
pub const CTRLTYPE_REC_INTERFACE: u8 = 0x01;
/// HID class `GET_REPORT` request.
pub const REQ_GET_REPORT: u8 = 0x01;
/// HID report type `Input`, placed in the high byte of `wValue`.
pub const REPTYPE_INPUT: u16 = 0x01;

/// USB endpoint address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint(pub u8);

impl Endpoint {
    /// IN endpoint with the given number.
    pub const fn input(number: u8) -> Self {
        Self(ENDPOINT_IN | (number & 0x0f))
    }

    pub const fn address(self) -> u8 {
        self.0
    }

    pub const fn is_input(self) -> bool {
        self.0 & ENDPOINT_IN != 0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

/// USB setup packet for a control transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRequest {
    pub request_type: u8,
    pub request: u8,
    pub value: u16,
    pub index: u16,
    pub length: u16,
}

impl ControlRequest {
    /// HID `GET_REPORT` for an input report on interface 0, no data stage.
    pub const fn get_input_report(report_id: u8) -> Self {
        Self {
            request_type: CTRLTYPE_DIR_DEVICE2HOST
                | CTRLTYPE_TYPE_CLASS
                | CTRLTYPE_REC_INTERFACE,
            request: REQ_GET_REPORT,
            value: (REPTYPE_INPUT << 8) | report_id as u16,
            index: 0,
            length: 0,
        }
    }
}

/// Handle of a submitted transfer, assigned by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransferId(pub u32);

impl fmt::Display for TransferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Final status of a transfer as reported by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferStatus {
    Completed,
    Stalled,
    Cancelled,
    Failed,
}

impl TransferStatus {
    pub fn is_completed(self) -> bool {
        self == TransferStatus::Completed
    }
}

/// A finished interrupt transfer.
#[derive(Debug, Clone, Copy)]
pub struct Completion<'a> {
    pub id: TransferId,
    pub status: TransferStatus,
    /// Received bytes; its length is the observed transfer length.
    pub data: &'a [u8],
}

/// Asynchronous USB transfer submission.
///
/// Both methods return as soon as the transfer is queued. Completion is
/// reported back to the device that submitted it.
pub trait Transport {
    fn submit_interrupt_in(
        &mut self,
        endpoint: Endpoint,
    ) -> Result<TransferId, TransportError>;

    fn submit_control_in(
        &mut self,
        request: ControlRequest,
    ) -> Result<TransferId, TransportError>;
}

/// Host services available to a driver: a one-shot timer and the input sink.
pub trait Host {
    /// Arm the device's one-shot timer. The host calls
    /// [`DrumDevice::on_timer_fire`](crate::DrumDevice::on_timer_fire) once it
    /// expires.
    fn set_timer(&mut self, delay: Duration);

    /// Deliver a freshly decoded state.
    fn report_input(&mut self, state: &GamepadState);
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn submit_interrupt_in(
        &mut self,
        endpoint: Endpoint,
    ) -> Result<TransferId, TransportError> {
        (**self).submit_interrupt_in(endpoint)
    }

    fn submit_control_in(
        &mut self,
        request: ControlRequest,
    ) -> Result<TransferId, TransportError> {
        (**self).submit_control_in(request)
    }
}

impl<H: Host + ?Sized> Host for &mut H {
    fn set_timer(&mut self, delay: Duration) {
        (**self).set_timer(delay);
    }

    fn report_input(&mut self, state: &GamepadState) {
        (**self).report_input(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_input_sets_direction_bit() {
        let ep = Endpoint::input(1);
        assert_eq!(ep.address(), 0x81);
        assert!(ep.is_input());
        assert!(!Endpoint(0x01).is_input());
        assert_eq!(ep.to_string(), "0x81");
    }

    #[test]
    fn get_input_report_setup_packet() {
        let req = ControlRequest::get_input_report(0);
        assert_eq!(req.request_type, 0xa1);
        assert_eq!(req.request, 0x01);
        assert_eq!(req.value, 0x0100);
        assert_eq!(req.index, 0);
        assert_eq!(req.length, 0);
    }
}
