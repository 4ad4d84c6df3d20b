//! Side/rim hit channels.
//!
//! Each rim sensor reports a 0-255 intensity. A non-zero intensity presses the
//! channel's shoulder button and drives its trigger axis; the first zero after
//! a hit is reported once as a release, after which the channel is idle.

use drumpad_gamepad::{Axis, Button, GamepadState, AXIS_MIN};

/// Which rim sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn axis(self) -> Axis {
        match self {
            Side::Left => Axis::LeftTrigger,
            Side::Right => Axis::RightTrigger,
        }
    }

    pub const fn shoulder(self) -> Button {
        match self {
            Side::Left => Button::LeftShoulder,
            Side::Right => Button::RightShoulder,
        }
    }
}

/// Outcome of one poll on a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitTransition {
    /// No hit now, none on the previous poll.
    Idle,
    /// The sensor reports a hit.
    Active,
    /// First poll without a hit after one or more active polls.
    Released,
}

/// Convert a hit intensity to a full-range signed axis value.
///
/// `0` maps to `-32768` and `255` to `32767`.
#[inline]
pub const fn scale(intensity: u8) -> i16 {
    if intensity == 0 {
        return AXIS_MIN;
    }
    ((intensity as i32 * 65535) / 255 - 32768) as i16
}

/// Per-channel session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitChannel {
    pub side_hit_active: bool,
    /// Intensity of the latest hit. Kept for diagnostics only.
    pub last_hit_intensity: u8,
}

impl HitChannel {
    /// Advance the channel by one poll and write its outputs into `state`.
    pub fn step(
        &mut self,
        side: Side,
        intensity: u8,
        state: &mut GamepadState,
    ) -> HitTransition {
        if intensity > 0 {
            state.press(side.shoulder());
            state.set_axis(side.axis(), scale(intensity));
            self.side_hit_active = true;
            self.last_hit_intensity = intensity;
            return HitTransition::Active;
        }

        state.set_axis(side.axis(), AXIS_MIN);
        if self.side_hit_active {
            self.side_hit_active = false;
            HitTransition::Released
        } else {
            HitTransition::Idle
        }
    }
}
