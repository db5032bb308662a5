//! Owned snapshot of the controller state.
//!
//! [`Snapshot`] is an **owned**, read-only copy of a [`ControllerState`] at a
//! point in time, tagged with the timestamp of the last event folded into it.
//! It's produced by [`Controller::snapshot`](crate::manager::Controller::snapshot)
//! and is cheap to copy for fan-out to other threads.
//!
//! # Semantics
//! - A snapshot is **immutable**. To refresh, poll the controller and take a new one.
//! - `time` is `0` until the first event has been applied.
//!
//! # Examples
//! ```
//! use xb360ctrl::{Button, ControllerState, Snapshot};
//!
//! let snap = Snapshot::new(0, ControllerState::default());
//! assert!(!snap.state().button(Button::A));
//! let json = snap.to_json().unwrap();
//! assert!(json.contains("\"l_trigger\":-32768"));
//! ```

use serde::{Deserialize, Serialize};

use crate::state::ControllerState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Device time of the last applied event.
    pub time: u32,
    pub state: ControllerState,
}

impl Snapshot {
    pub fn new(time: u32, state: ControllerState) -> Self {
        Self { time, state }
    }

    #[inline]
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Render as compact JSON for handing to another consumer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_keeps_every_field() {
        let mut state = ControllerState::default();
        state.start = true;
        state.d_pad_y = -1;
        let snap = Snapshot::new(4242, state);

        let back = Snapshot::from_json(&snap.to_json().unwrap()).unwrap();
        assert_eq!(back, snap);
    }
}
