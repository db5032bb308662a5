//! Decoded joystick events.
//!
//! A [`ControllerEvent`] is one `(time, value, type, number)` record as the Linux
//! joystick interface reports it. Events are tiny `Copy` values: they are created
//! by a decoder, consumed once by the [`StateMachine`](crate::machine::StateMachine),
//! and then dropped (or encoded with [`codec`](crate::codec)).
//!
//! ## Value conventions
//! - **Buttons** (`event_type == 1`): `value` is `0` for released, non-zero for pressed.
//! - **Axes** (any other type): `value` is the raw signed reading in `[-32768, 32767]`.
//!
//! ### Type tags
//! The kernel sets [`JS_EVENT_INIT`] on the synthetic events it emits right after
//! open. Dispatch does not strip that bit: only a tag of exactly `1` is a button
//! event, so an init-flagged button (`0x81`) takes the axis path.

use serde::{Deserialize, Serialize};

/// Button pressed/released.
pub const JS_EVENT_BUTTON: u8 = 0x01;
/// Joystick moved.
pub const JS_EVENT_AXIS: u8 = 0x02;
/// Initial state of the device.
pub const JS_EVENT_INIT: u8 = 0x80;

/// One observed input change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControllerEvent {
    /// Device-relative timestamp in milliseconds. Non-decreasing within a session.
    pub time: u32,
    /// Button level or axis reading, depending on `event_type`.
    pub value: i16,
    /// Raw type tag.
    pub event_type: u8,
    /// Button or axis index within its class.
    pub number: u8,
}

impl ControllerEvent {
    /// Build an event from an already-structured raw record.
    pub const fn new(time: u32, value: i16, event_type: u8, number: u8) -> Self {
        Self {
            time,
            value,
            event_type,
            number,
        }
    }

    /// Button event for `number`, pressed when `pressed` is true.
    pub const fn button(time: u32, number: u8, pressed: bool) -> Self {
        Self::new(time, pressed as i16, JS_EVENT_BUTTON, number)
    }

    /// Axis event for `number` carrying `value`.
    pub const fn axis(time: u32, number: u8, value: i16) -> Self {
        Self::new(time, value, JS_EVENT_AXIS, number)
    }

    /// True when this event is routed to button handling.
    #[inline]
    pub const fn is_button(&self) -> bool {
        self.event_type == JS_EVENT_BUTTON
    }

    /// True when the kernel flagged this as initial-state replay.
    #[inline]
    pub const fn is_init(&self) -> bool {
        self.event_type & JS_EVENT_INIT != 0
    }
}
