//! xb360ctrl: Xbox 360 joystick event decoding and state tracking.
//!
//! Decodes raw joystick events into [`ControllerEvent`]s, folds them into a
//! [`ControllerState`] with a [`StateMachine`], and defines a fixed 8-byte
//! wire encoding for a single event ([`codec`]).
//!
//! ```
//! use xb360ctrl::{apply, codec, ControllerEvent, ControllerState};
//!
//! let bytes = codec::encode(&ControllerEvent::new(17, 1, 1, 0));
//! let event = codec::decode(&bytes).unwrap();
//!
//! let mut state = ControllerState::default();
//! apply(&mut state, &event);
//! assert!(state.a);
//! ```

pub mod backends;
pub mod codec;
pub mod config;
pub mod device;
pub mod error;
pub mod event;
pub mod machine;
pub mod manager;
pub mod observer;
pub mod snapshot;
pub mod state;

pub use config::*;
pub use device::*;
pub use error::*;
pub use event::*;
pub use machine::*;
pub use manager::*;
pub use observer::*;
pub use snapshot::*;
pub use state::*;
