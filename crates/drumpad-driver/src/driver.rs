use drumpad_gamepad::{Axis, Button, DeviceClass, DeviceDescriptor, DeviceId};

use crate::config::DriverConfig;
use crate::device::DrumDevice;
use crate::transport::{Host, Transport};

pub const VENDOR_ID: u16 = 0x056e;
pub const PRODUCT_ID: u16 = 0x2004;

/// Devices handled by this driver.
pub const COMPATIBLE: [DeviceId; 1] = [DeviceId::new(VENDOR_ID, PRODUCT_ID)];

/// Capabilities of the drum as advertised to the host.
pub static DESCRIPTOR: DeviceDescriptor = DeviceDescriptor {
    id: DeviceId::new(VENDOR_ID, PRODUCT_ID),
    class: DeviceClass::Gamepad,
    buttons: &[
        Button::South,
        Button::East,
        Button::West,
        Button::North,
        Button::LeftShoulder,
        Button::RightShoulder,
        Button::Back,
        Button::Start,
        Button::Guide,
        Button::DpadUp,
        Button::DpadDown,
        Button::DpadLeft,
        Button::DpadRight,
    ],
    axes: &[Axis::LeftTrigger, Axis::RightTrigger],
    num_touch_points: 0,
    num_leds: 0,
    num_accelerometers: 0,
    has_rumble: false,
};

/// Registry-facing entry points of the IINE Pro Max drum driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrumDriver;

impl DrumDriver {
    pub const NAME: &'static str = "iine-pro-max-drum";

    /// Whether this driver handles the given device. Exact id match only.
    pub fn probe(vendor_id: u16, product_id: u16) -> bool {
        DeviceId::new(vendor_id, product_id).is_compatible(&COMPATIBLE)
    }

    pub fn descriptor() -> &'static DeviceDescriptor {
        &DESCRIPTOR
    }

    /// Probe and, on a match, create a device in the `Probed` state.
    pub fn attach<T: Transport, H: Host>(
        vendor_id: u16,
        product_id: u16,
        transport: T,
        host: H,
        config: DriverConfig,
    ) -> Option<DrumDevice<T, H>> {
        if !Self::probe(vendor_id, product_id) {
            return None;
        }
        Some(DrumDevice::new(transport, host, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_accepts_only_the_drum() {
        assert!(DrumDriver::probe(0x056e, 0x2004));
        assert!(!DrumDriver::probe(0x056e, 0x2005));
        assert!(!DrumDriver::probe(0x045e, 0x028e));
        assert!(!DrumDriver::probe(0, 0));
    }

    #[test]
    fn descriptor_has_no_extra_features() {
        let desc = DrumDriver::descriptor();
        assert_eq!(desc.class, DeviceClass::Gamepad);
        assert_eq!(desc.id, DeviceId::new(0x056e, 0x2004));
        assert_eq!(desc.num_touch_points, 0);
        assert_eq!(desc.num_leds, 0);
        assert_eq!(desc.num_accelerometers, 0);
        assert!(!desc.has_rumble);
        assert_eq!(desc.available_buttons().count(), 13);
        assert_eq!(desc.available_axes().count(), 2);
    }
}
