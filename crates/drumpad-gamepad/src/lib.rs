//! Host-side gamepad vocabulary shared by input drivers.
//!
//! Drivers translate device reports into a [`GamepadState`] and advertise what
//! they can produce through a static [`DeviceDescriptor`].

mod descriptor;
mod state;
mod types;

pub use crate::descriptor::{DeviceClass, DeviceDescriptor};
pub use crate::state::{GamepadState, AXIS_MAX, AXIS_MIN};
pub use crate::types::{Axis, Button, DeviceId};

use drumpad_bit_mask::Bitmask;

/// A set of abstract buttons.
pub type ButtonSet = Bitmask<Button>;

/// A set of abstract axes.
pub type AxisSet = Bitmask<Axis>;
