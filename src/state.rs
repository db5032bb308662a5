//! Controller state snapshot and the index→field tables.
//!
//! [`ControllerState`] holds the last known level of every button and the last
//! accepted reading of every axis on an Xbox 360 pad. It is mutated only by the
//! [`StateMachine`](crate::machine::StateMachine); everyone else reads it.
//!
//! # Defaults
//! - Buttons: `false`.
//! - Sticks and D-pad: `0`.
//! - Triggers: [`TRIGGER_RELEASED`] (`-32768`). The trigger axis spans the full
//!   signed range, so `0` is a half-pulled trigger, not a released one.

use serde::{Deserialize, Serialize};

/// Trigger reading for "fully released / nothing received yet".
pub const TRIGGER_RELEASED: i16 = i16::MIN;

/// Digital buttons, in joystick-index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    A,
    B,
    X,
    Y,
    LBumper,
    RBumper,
    Back,
    Start,
    Guide,
    LStickPress,
    RStickPress,
}

/// Joystick button index → field. Position in the table is the index.
pub const BUTTON_MAP: [Button; 11] = [
    Button::A,
    Button::B,
    Button::X,
    Button::Y,
    Button::LBumper,
    Button::RBumper,
    Button::Back,
    Button::Start,
    Button::Guide,
    Button::LStickPress,
    Button::RStickPress,
];

impl Button {
    /// Every button, in joystick-index order.
    pub const ALL: [Button; 11] = BUTTON_MAP;

    /// Look up the button for a joystick index; `None` for unknown indices.
    #[inline]
    pub fn from_index(number: u8) -> Option<Button> {
        BUTTON_MAP.get(number as usize).copied()
    }

    /// Short label used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Button::A => "A",
            Button::B => "B",
            Button::X => "X",
            Button::Y => "Y",
            Button::LBumper => "LB",
            Button::RBumper => "RB",
            Button::Back => "Back",
            Button::Start => "Start",
            Button::Guide => "Guide",
            Button::LStickPress => "LThumb",
            Button::RStickPress => "RThumb",
        }
    }
}

/// Analog axes, in joystick-index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    LStickX,
    LStickY,
    LTrigger,
    RStickY,
    RStickX,
    RTrigger,
    DPadX,
    DPadY,
}

/// Joystick axis index → field. Position in the table is the index.
pub const AXIS_MAP: [Axis; 8] = [
    Axis::LStickX,
    Axis::LStickY,
    Axis::LTrigger,
    Axis::RStickY,
    Axis::RStickX,
    Axis::RTrigger,
    Axis::DPadX,
    Axis::DPadY,
];

impl Axis {
    /// Every axis, in joystick-index order.
    pub const ALL: [Axis; 8] = AXIS_MAP;

    /// Look up the axis for a joystick index; `None` for unknown indices.
    #[inline]
    pub fn from_index(number: u8) -> Option<Axis> {
        AXIS_MAP.get(number as usize).copied()
    }

    /// Whether readings on this axis go through deadzone filtering.
    ///
    /// Only indices 0..=3 are filtered. RStickX shares a stick with the
    /// filtered RStickY but is written raw.
    // TODO: unify once the asymmetric deadzone gets product sign-off.
    #[inline]
    pub const fn has_deadzone(self) -> bool {
        matches!(
            self,
            Axis::LStickX | Axis::LStickY | Axis::LTrigger | Axis::RStickY
        )
    }

    /// True for the two trigger axes.
    #[inline]
    pub const fn is_trigger(self) -> bool {
        matches!(self, Axis::LTrigger | Axis::RTrigger)
    }

    /// Value this axis holds after a reset.
    #[inline]
    pub const fn rest_value(self) -> i16 {
        if self.is_trigger() {
            TRIGGER_RELEASED
        } else {
            0
        }
    }

    /// Short label used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::LStickX => "LX",
            Axis::LStickY => "LY",
            Axis::LTrigger => "LT",
            Axis::RStickY => "RY",
            Axis::RStickX => "RX",
            Axis::RTrigger => "RT",
            Axis::DPadX => "DPadX",
            Axis::DPadY => "DPadY",
        }
    }
}

/// Last known state of every button and axis on the pad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControllerState {
    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
    pub back: bool,
    pub start: bool,
    pub l_bumper: bool,
    pub r_bumper: bool,
    pub l_stick_press: bool,
    pub r_stick_press: bool,
    pub guide: bool,

    pub l_stick_x: i16,
    pub l_stick_y: i16,
    pub r_stick_x: i16,
    pub r_stick_y: i16,
    pub l_trigger: i16,
    pub r_trigger: i16,
    pub d_pad_x: i16,
    pub d_pad_y: i16,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            a: false,
            b: false,
            x: false,
            y: false,
            back: false,
            start: false,
            l_bumper: false,
            r_bumper: false,
            l_stick_press: false,
            r_stick_press: false,
            guide: false,
            l_stick_x: 0,
            l_stick_y: 0,
            r_stick_x: 0,
            r_stick_y: 0,
            l_trigger: TRIGGER_RELEASED,
            r_trigger: TRIGGER_RELEASED,
            d_pad_x: 0,
            d_pad_y: 0,
        }
    }
}

impl ControllerState {
    /// A freshly reset state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put every field back to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current level of `button`.
    pub fn button(&self, button: Button) -> bool {
        match button {
            Button::A => self.a,
            Button::B => self.b,
            Button::X => self.x,
            Button::Y => self.y,
            Button::LBumper => self.l_bumper,
            Button::RBumper => self.r_bumper,
            Button::Back => self.back,
            Button::Start => self.start,
            Button::Guide => self.guide,
            Button::LStickPress => self.l_stick_press,
            Button::RStickPress => self.r_stick_press,
        }
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        *self.button_mut(button) = pressed;
    }

    /// Current reading of `axis`.
    pub fn axis(&self, axis: Axis) -> i16 {
        match axis {
            Axis::LStickX => self.l_stick_x,
            Axis::LStickY => self.l_stick_y,
            Axis::LTrigger => self.l_trigger,
            Axis::RStickY => self.r_stick_y,
            Axis::RStickX => self.r_stick_x,
            Axis::RTrigger => self.r_trigger,
            Axis::DPadX => self.d_pad_x,
            Axis::DPadY => self.d_pad_y,
        }
    }

    pub fn set_axis(&mut self, axis: Axis, value: i16) {
        *self.axis_mut(axis) = value;
    }

    /// Buttons currently held down, in index order.
    pub fn pressed(&self) -> impl Iterator<Item = Button> + '_ {
        Button::ALL.into_iter().filter(|b| self.button(*b))
    }

    fn button_mut(&mut self, button: Button) -> &mut bool {
        match button {
            Button::A => &mut self.a,
            Button::B => &mut self.b,
            Button::X => &mut self.x,
            Button::Y => &mut self.y,
            Button::LBumper => &mut self.l_bumper,
            Button::RBumper => &mut self.r_bumper,
            Button::Back => &mut self.back,
            Button::Start => &mut self.start,
            Button::Guide => &mut self.guide,
            Button::LStickPress => &mut self.l_stick_press,
            Button::RStickPress => &mut self.r_stick_press,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut i16 {
        match axis {
            Axis::LStickX => &mut self.l_stick_x,
            Axis::LStickY => &mut self.l_stick_y,
            Axis::LTrigger => &mut self.l_trigger,
            Axis::RStickY => &mut self.r_stick_y,
            Axis::RStickX => &mut self.r_stick_x,
            Axis::RTrigger => &mut self.r_trigger,
            Axis::DPadX => &mut self.d_pad_x,
            Axis::DPadY => &mut self.d_pad_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_match_joystick_indices() {
        assert_eq!(Button::from_index(0), Some(Button::A));
        assert_eq!(Button::from_index(6), Some(Button::Back));
        assert_eq!(Button::from_index(8), Some(Button::Guide));
        assert_eq!(Button::from_index(10), Some(Button::RStickPress));
        assert_eq!(Button::from_index(11), None);

        assert_eq!(Axis::from_index(2), Some(Axis::LTrigger));
        assert_eq!(Axis::from_index(3), Some(Axis::RStickY));
        assert_eq!(Axis::from_index(4), Some(Axis::RStickX));
        assert_eq!(Axis::from_index(7), Some(Axis::DPadY));
        assert_eq!(Axis::from_index(8), None);
    }

    #[test]
    fn deadzone_covers_first_four_indices_only() {
        let filtered: Vec<_> = Axis::ALL.iter().map(|a| a.has_deadzone()).collect();
        assert_eq!(
            filtered,
            [true, true, true, true, false, false, false, false]
        );
    }

    #[test]
    fn default_releases_triggers() {
        let s = ControllerState::default();
        assert_eq!(s.l_trigger, -32768);
        assert_eq!(s.r_trigger, -32768);
        for axis in Axis::ALL {
            assert_eq!(s.axis(axis), axis.rest_value());
        }
        assert_eq!(s.pressed().count(), 0);
    }

    #[test]
    fn setters_touch_one_field() {
        let mut s = ControllerState::new();
        s.set_button(Button::Guide, true);
        s.set_axis(Axis::DPadX, -1);

        let mut expected = ControllerState::new();
        expected.guide = true;
        expected.d_pad_x = -1;
        assert_eq!(s, expected);
        assert_eq!(s.pressed().collect::<Vec<_>>(), [Button::Guide]);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut s = ControllerState::new();
        s.a = true;
        s.r_trigger = 12;
        s.reset();
        let once = s;
        s.reset();
        assert_eq!(s, once);
        assert_eq!(s, ControllerState::default());
    }
}
