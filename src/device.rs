//! Event source seam.
//!
//! An [`EventSource`] hands out one decoded [`ControllerEvent`] per call. Real
//! devices block until the pad reports a change; the in-memory
//! [`VirtualSource`](crate::backends::virtual_input::VirtualSource) never blocks.

use crate::error::Result;
use crate::event::ControllerEvent;

pub trait EventSource {
    /// Block until the next event is available.
    ///
    /// Errors are the source's own (`Io`, `Disconnected`); the core never
    /// retries them.
    fn next_event(&mut self) -> Result<ControllerEvent>;

    /// Human-readable label for logs.
    fn name(&self) -> &str;
}

impl<S: EventSource + ?Sized> EventSource for Box<S> {
    fn next_event(&mut self) -> Result<ControllerEvent> {
        (**self).next_event()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
