use drumpad_gamepad::GamepadState;

use crate::buttons::map_buttons;
use crate::hits::{HitChannel, HitTransition, Side};
use crate::report::RawReport;

/// Mutable per-connection state. Zeroed at init, dropped on disconnect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceSession {
    pub left: HitChannel,
    pub right: HitChannel,
}

/// Result of applying one report to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub state: GamepadState,
    pub left: HitTransition,
    pub right: HitTransition,
}

impl DeviceSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channel(&self, side: Side) -> &HitChannel {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Compute the abstract state for `report`, advancing both hit channels.
    pub fn apply(&mut self, report: &RawReport) -> Decoded {
        let mut state = GamepadState::new();
        state.press_all(map_buttons(report.buttons));
        let left = self.left.step(Side::Left, report.left_hit, &mut state);
        let right = self.right.step(Side::Right, report.right_hit, &mut state);
        Decoded { state, left, right }
    }
}

#[cfg(test)]
mod tests {
    use drumpad_gamepad::{Axis, Button, ButtonSet};

    use super::*;
    use crate::hits::scale;

    fn report(buttons: u16, left_hit: u8, right_hit: u8) -> RawReport {
        RawReport {
            buttons,
            left_hit,
            right_hit,
            ..RawReport::idle()
        }
    }

    #[test]
    fn face_button_with_idle_rims() {
        let mut session = DeviceSession::new();
        let decoded = session.apply(&report(0x1000, 0, 0));
        assert_eq!(decoded.state.buttons(), ButtonSet::new(&[Button::South]));
        assert_eq!(decoded.state.axis(Axis::LeftTrigger), -32768);
        assert_eq!(decoded.state.axis(Axis::RightTrigger), -32768);
    }

    #[test]
    fn left_rim_hit_only() {
        let mut session = DeviceSession::new();
        let decoded = session.apply(&report(0, 128, 0));
        // (128 * 65535 / 255) - 32768 under truncating division
        assert_eq!(
            i32::from(decoded.state.axis(Axis::LeftTrigger)),
            (128 * 65535 / 255) - 32768
        );
        assert_eq!(decoded.state.axis(Axis::LeftTrigger), 128);
        assert!(decoded.state.is_pressed(Button::LeftShoulder));
        assert_eq!(decoded.state.axis(Axis::RightTrigger), -32768);
        assert!(!decoded.state.is_pressed(Button::RightShoulder));
        assert_eq!(decoded.left, HitTransition::Active);
        assert_eq!(decoded.right, HitTransition::Idle);
    }

    #[test]
    fn channels_release_independently() {
        let mut session = DeviceSession::new();
        session.apply(&report(0, 40, 90));
        let decoded = session.apply(&report(0, 0, 90));
        assert_eq!(decoded.left, HitTransition::Released);
        assert_eq!(decoded.right, HitTransition::Active);
        assert_eq!(decoded.state.axis(Axis::RightTrigger), scale(90));

        let decoded = session.apply(&report(0, 0, 0));
        assert_eq!(decoded.left, HitTransition::Idle);
        assert_eq!(decoded.right, HitTransition::Released);
        assert_eq!(session.channel(Side::Left).last_hit_intensity, 40);
        assert_eq!(session.channel(Side::Right).last_hit_intensity, 90);
    }

    #[test]
    fn native_shoulder_and_rim_hit_collapse() {
        let mut session = DeviceSession::new();
        let decoded = session.apply(&report(0x0100, 7, 0));
        assert_eq!(
            decoded.state.buttons(),
            ButtonSet::new(&[Button::LeftShoulder])
        );
    }
}
