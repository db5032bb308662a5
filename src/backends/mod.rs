//! Event sources for `xb360ctrl`.
//!
//! Implementations of [`EventSource`](crate::device::EventSource).
//!
//! # Feature flags
//! - **`joystick`**: enables the Linux joystick (`/dev/input/js*`) backend
//!   (default in this build).
//!
//! The in-memory [`virtual_input`] source is always available.

#[cfg(all(feature = "joystick", target_os = "linux"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "joystick", target_os = "linux"))))]
pub mod joystick;

pub mod virtual_input;
