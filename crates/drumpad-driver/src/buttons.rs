//! Native button slots and their abstract equivalents.

use drumpad_gamepad::{Button, ButtonSet};

/// Logical button slots of the drum's Xbox 360 style report.
///
/// The face of the drum ("don") reports through the thumb-stick clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeButton {
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    Start,
    Back,
    LeftThumb,
    RightThumb,
    LeftShoulder,
    RightShoulder,
    Guide,
    A,
    B,
    X,
    Y,
}

impl NativeButton {
    /// Every native slot, in report bit order.
    pub const ALL: [NativeButton; 15] = [
        NativeButton::DpadUp,
        NativeButton::DpadDown,
        NativeButton::DpadLeft,
        NativeButton::DpadRight,
        NativeButton::Start,
        NativeButton::Back,
        NativeButton::LeftThumb,
        NativeButton::RightThumb,
        NativeButton::LeftShoulder,
        NativeButton::RightShoulder,
        NativeButton::Guide,
        NativeButton::A,
        NativeButton::B,
        NativeButton::X,
        NativeButton::Y,
    ];

    /// Bit of this slot in the report's button field. 0x0800 is unused.
    pub const fn mask(self) -> u16 {
        match self {
            NativeButton::DpadUp => 0x0001,
            NativeButton::DpadDown => 0x0002,
            NativeButton::DpadLeft => 0x0004,
            NativeButton::DpadRight => 0x0008,
            NativeButton::Start => 0x0010,
            NativeButton::Back => 0x0020,
            NativeButton::LeftThumb => 0x0040,
            NativeButton::RightThumb => 0x0080,
            NativeButton::LeftShoulder => 0x0100,
            NativeButton::RightShoulder => 0x0200,
            NativeButton::Guide => 0x0400,
            NativeButton::A => 0x1000,
            NativeButton::B => 0x2000,
            NativeButton::X => 0x4000,
            NativeButton::Y => 0x8000,
        }
    }

    /// Abstract button reported for this slot.
    ///
    /// Many-to-one: both "don" halves share a face button with A and B so the
    /// drum face plays like the primary face buttons.
    pub const fn to_abstract(self) -> Button {
        match self {
            NativeButton::DpadUp => Button::DpadUp,
            NativeButton::DpadDown => Button::DpadDown,
            NativeButton::DpadLeft => Button::DpadLeft,
            NativeButton::DpadRight => Button::DpadRight,
            NativeButton::Start => Button::Start,
            NativeButton::Back => Button::Back,
            NativeButton::LeftThumb => Button::South,
            NativeButton::RightThumb => Button::East,
            NativeButton::LeftShoulder => Button::LeftShoulder,
            NativeButton::RightShoulder => Button::RightShoulder,
            NativeButton::Guide => Button::Guide,
            NativeButton::A => Button::South,
            NativeButton::B => Button::East,
            NativeButton::X => Button::West,
            NativeButton::Y => Button::North,
        }
    }

    #[inline]
    pub const fn is_set(self, native: u16) -> bool {
        native & self.mask() != 0
    }
}

/// Translate the report's button field into abstract buttons.
pub fn map_buttons(native: u16) -> ButtonSet {
    let mut buttons = ButtonSet::empty();
    for slot in NativeButton::ALL {
        if slot.is_set(native) {
            buttons.insert(slot.to_abstract());
        }
    }
    buttons
}
