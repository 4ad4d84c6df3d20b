use drumpad_bit_mask::Bitmask;

use crate::state::GamepadState;
use crate::types::{Axis, Button, DeviceId};
use crate::{AxisSet, ButtonSet};

/// Broad kind of input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Gamepad,
    Keyboard,
    Mouse,
}

/// Static capability declaration advertised to the host by a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceDescriptor {
    pub id: DeviceId,
    pub class: DeviceClass,
    pub buttons: &'static [Button],
    pub axes: &'static [Axis],
    pub num_touch_points: u8,
    pub num_leds: u8,
    pub num_accelerometers: u8,
    pub has_rumble: bool,
}

impl DeviceDescriptor {
    pub fn available_buttons(&self) -> ButtonSet {
        Bitmask::new(self.buttons)
    }

    pub fn available_axes(&self) -> AxisSet {
        Bitmask::new(self.axes)
    }

    /// Whether `state` only uses buttons and axes this device advertises.
    pub fn covers(&self, state: &GamepadState) -> bool {
        state.buttons().is_subset(&self.available_buttons())
            && state.axes().is_subset(&self.available_axes())
    }
}
