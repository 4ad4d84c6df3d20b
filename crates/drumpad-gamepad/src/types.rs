use std::fmt;

use drumpad_bit_derive::Bit;

/// Abstract gamepad buttons, named by face position rather than label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Bit)]
pub enum Button {
    South,
    East,
    West,
    North,
    Back,
    Guide,
    Start,
    LeftStick,
    RightStick,
    LeftShoulder,
    RightShoulder,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
}

/// Abstract analog axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Bit)]
pub enum Axis {
    LeftX,
    LeftY,
    RightX,
    RightY,
    LeftTrigger,
    RightTrigger,
}

/// USB vendor/product pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId {
    pub vendor_id: u16,
    pub product_id: u16,
}

impl DeviceId {
    pub const fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
        }
    }

    /// Exact match against a list of supported ids. No wildcards.
    pub fn is_compatible(self, supported: &[DeviceId]) -> bool {
        supported.contains(&self)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:04x}", self.vendor_id, self.product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_id_matches_exactly() {
        let supported = [DeviceId::new(0x056e, 0x2004)];
        assert!(DeviceId::new(0x056e, 0x2004).is_compatible(&supported));
        assert!(!DeviceId::new(0x056e, 0x2005).is_compatible(&supported));
        assert!(!DeviceId::new(0x045e, 0x2004).is_compatible(&supported));
        assert!(!DeviceId::new(0x056e, 0x2004).is_compatible(&[]));
    }

    #[test]
    fn device_id_display_is_hex_pair() {
        assert_eq!(DeviceId::new(0x056e, 0x2004).to_string(), "056e:2004");
    }
}
