//! Folding events into a [`ControllerState`].
//!
//! Dispatch is two-level: the type tag picks button or axis handling, then the
//! index is looked up in [`BUTTON_MAP`] / [`AXIS_MAP`]. Anything that misses
//! the tables is a no-op, never an error.
//!
//! Axes 0..=3 go through the deadzone (`|value| > deadzone` to be written);
//! axes 4..=7 are written raw. See [`Axis::has_deadzone`].

use crate::event::ControllerEvent;
use crate::observer::{FieldChange, StateObserver};
use crate::state::{Axis, Button, ControllerState, AXIS_MAP, BUTTON_MAP};

/// Default symmetric deadzone for filtered axes.
pub const DEFAULT_DEADZONE: i16 = 200;

/// Apply one event to `state` with the default deadzone.
pub fn apply(state: &mut ControllerState, event: &ControllerEvent) {
    fold(state, event, DEFAULT_DEADZONE);
}

/// Reset `state` to its defaults.
pub fn reset(state: &mut ControllerState) {
    state.reset();
}

/// Resolve the field write an event performs, if any.
fn resolve(event: &ControllerEvent, deadzone: i16) -> Option<FieldChange> {
    if event.is_button() {
        let button: Button = *BUTTON_MAP.get(event.number as usize)?;
        return Some(FieldChange::Button {
            button,
            pressed: event.value != 0,
            time: event.time,
        });
    }

    let axis: Axis = *AXIS_MAP.get(event.number as usize)?;
    if axis.has_deadzone() && !outside_deadzone(event.value, deadzone) {
        return None;
    }
    Some(FieldChange::Axis {
        axis,
        value: event.value,
        time: event.time,
    })
}

#[inline]
fn outside_deadzone(value: i16, deadzone: i16) -> bool {
    // Widen so `-deadzone` cannot overflow for i16::MIN.
    let (v, dz) = (i32::from(value), i32::from(deadzone));
    v > dz || v < -dz
}

fn write(state: &mut ControllerState, change: &FieldChange) {
    match *change {
        FieldChange::Button {
            button, pressed, ..
        } => state.set_button(button, pressed),
        FieldChange::Axis { axis, value, .. } => state.set_axis(axis, value),
    }
}

fn fold(
    state: &mut ControllerState,
    event: &ControllerEvent,
    deadzone: i16,
) -> Option<FieldChange> {
    let change = resolve(event, deadzone)?;
    write(state, &change);
    Some(change)
}

/// Event folder with a configurable deadzone and optional observers.
///
/// The machine holds no state of its own beyond configuration: the result of
/// [`StateMachine::apply`] is a function of the passed-in state and event only.
pub struct StateMachine {
    deadzone: i16,
    observers: Vec<Box<dyn StateObserver>>,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("deadzone", &self.deadzone)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl StateMachine {
    pub fn new() -> Self {
        Self::with_deadzone(DEFAULT_DEADZONE)
    }

    /// Negative deadzones are treated as their magnitude.
    pub fn with_deadzone(deadzone: i16) -> Self {
        Self {
            deadzone: deadzone.saturating_abs(),
            observers: Vec::new(),
        }
    }

    pub fn deadzone(&self) -> i16 {
        self.deadzone
    }

    /// Register an observer notified on every field write.
    pub fn add_observer(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Apply one event. Returns the write performed, or `None` for a no-op.
    pub fn apply(
        &mut self,
        state: &mut ControllerState,
        event: &ControllerEvent,
    ) -> Option<FieldChange> {
        #[cfg(feature = "debug-log")]
        log::trace!(
            "[EVENT] t={} type=0x{:02x} number={} value={}",
            event.time,
            event.event_type,
            event.number,
            event.value
        );

        let change = fold(state, event, self.deadzone)?;
        for observer in self.observers.iter_mut() {
            observer.on_change(&change);
        }
        Some(change)
    }

    /// Apply a batch of events in order.
    pub fn apply_all<'a>(
        &mut self,
        state: &mut ControllerState,
        events: impl IntoIterator<Item = &'a ControllerEvent>,
    ) {
        for event in events {
            self.apply(state, event);
        }
    }

    /// Reset `state` to its defaults. Observers are not notified.
    pub fn reset(&self, state: &mut ControllerState) {
        state.reset();
    }
}
