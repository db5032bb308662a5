#![cfg(target_os = "linux")]

//! Linux joystick API backend.
//!
//! Reads `struct js_event` records from a `/dev/input/jsN` node:
//!
//! ```text
//! struct js_event {
//!     __u32 time;     /* event timestamp in milliseconds */
//!     __s16 value;    /* value */
//!     __u8 type;      /* event type */
//!     __u8 number;    /* axis/button number */
//! };
//! ```
//!
//! The kernel writes these in host byte order, which is *not* the crate's
//! big-endian wire layout; see [`codec`](crate::codec) for that.
//!
//! The node is opened in blocking mode, so [`EventSource::next_event`] waits for
//! the next physical change. The file descriptor is closed when the
//! [`JoystickDevice`] is dropped.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use crate::codec::EVENT_SIZE;
use crate::device::EventSource;
use crate::error::{Error, Result};
use crate::event::ControllerEvent;

/// Default joystick node.
pub const DEFAULT_DEVICE: &str = "/dev/input/js0";

/// An open joystick node.
#[derive(Debug)]
pub struct JoystickDevice {
    path: PathBuf,
    name: String,
    file: File,
}

impl JoystickDevice {
    /// Open `path` read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().read(true).open(&path)?;
        log::info!("Opened joystick {}", path.display());

        Ok(Self {
            name: format!("joystick:{}", path.display()),
            path,
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the node. Dropping the device closes it too.
    pub fn close(self) {
        log::info!("Closing joystick {}", self.path.display());
    }

    /// Decode one kernel record (host byte order).
    pub fn decode_native(raw: &[u8; EVENT_SIZE]) -> ControllerEvent {
        ControllerEvent {
            time: u32::from_ne_bytes([raw[0], raw[1], raw[2], raw[3]]),
            value: i16::from_ne_bytes([raw[4], raw[5]]),
            event_type: raw[6],
            number: raw[7],
        }
    }
}

impl EventSource for JoystickDevice {
    fn next_event(&mut self) -> Result<ControllerEvent> {
        let mut raw = [0u8; EVENT_SIZE];
        match self.file.read_exact(&mut raw) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                log::warn!("{}: end of stream", self.name);
                return Err(Error::Disconnected);
            }
            Err(e) if e.raw_os_error() == Some(libc::ENODEV) => {
                log::warn!("{}: device removed", self.name);
                return Err(Error::Disconnected);
            }
            Err(e) => return Err(e.into()),
        }

        let event = Self::decode_native(&raw);
        #[cfg(feature = "debug-log")]
        log::trace!("[JS/READ] {} {:?}", self.name, event);
        Ok(event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
