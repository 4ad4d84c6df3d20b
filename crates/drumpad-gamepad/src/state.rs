use drumpad_bit_mask::Bitable;

use crate::types::{Axis, Button};
use crate::{AxisSet, ButtonSet};

/// Lowest value an abstract axis can take; also the released trigger value.
pub const AXIS_MIN: i16 = i16::MIN;
/// Highest value an abstract axis can take.
pub const AXIS_MAX: i16 = i16::MAX;

/// Snapshot of a gamepad handed to the host on every decoded report.
///
/// Axes the driver never touched read as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GamepadState {
    buttons: ButtonSet,
    axes: [i16; Axis::COUNT],
    touched_axes: AxisSet,
}

impl GamepadState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn press(&mut self, button: Button) {
        self.buttons.insert(button);
    }

    #[inline]
    pub fn press_all(&mut self, buttons: ButtonSet) {
        self.buttons = self.buttons | buttons;
    }

    #[inline]
    pub fn is_pressed(&self, button: Button) -> bool {
        self.buttons.contains(button)
    }

    pub fn buttons(&self) -> ButtonSet {
        self.buttons
    }

    #[inline]
    pub fn set_axis(&mut self, axis: Axis, value: i16) {
        self.axes[axis.index() as usize] = value;
        self.touched_axes.insert(axis);
    }

    #[inline]
    pub fn axis(&self, axis: Axis) -> i16 {
        self.axes[axis.index() as usize]
    }

    /// Axes that were explicitly written.
    pub fn axes(&self) -> AxisSet {
        self.touched_axes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = GamepadState::new();
        assert!(state.buttons().is_empty());
        assert!(state.axes().is_empty());
        assert_eq!(state.axis(Axis::LeftTrigger), 0);
    }

    #[test]
    fn pressing_twice_collapses() {
        let mut state = GamepadState::new();
        state.press(Button::South);
        state.press(Button::South);
        assert_eq!(state.buttons().count(), 1);
        assert!(state.is_pressed(Button::South));
        assert!(!state.is_pressed(Button::East));
    }

    #[test]
    fn set_axis_records_value_and_membership() {
        let mut state = GamepadState::new();
        state.set_axis(Axis::RightTrigger, AXIS_MIN);
        assert_eq!(state.axis(Axis::RightTrigger), -32768);
        assert!(state.axes().contains(Axis::RightTrigger));
        assert!(!state.axes().contains(Axis::LeftTrigger));
    }
}
