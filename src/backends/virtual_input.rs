use std::collections::VecDeque;

use crate::codec;
use crate::device::EventSource;
use crate::error::{Error, Result};
use crate::event::ControllerEvent;

/// In-memory FIFO event source.
///
/// Useful for tests, replays, and feeding events received over some other
/// transport. An empty queue reports [`Error::Disconnected`].
#[derive(Debug, Default)]
pub struct VirtualSource {
    name: String,
    events: VecDeque<ControllerEvent>,
    clock: u32,
}

impl VirtualSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Inject a raw event into the queue.
    pub fn feed(&mut self, event: ControllerEvent) {
        self.clock = self.clock.max(event.time);
        self.events.push_back(event);
    }

    /// Inject every record packed in `bytes` (big-endian wire layout).
    ///
    /// Stops at the first malformed record; records before it stay queued.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        let mut fed = 0;
        for event in codec::decode_stream(bytes) {
            self.feed(event?);
            fed += 1;
        }
        Ok(fed)
    }

    /// Convenience method to queue a button press at the next tick.
    pub fn press_button(&mut self, number: u8) {
        let t = self.tick();
        self.feed(ControllerEvent::button(t, number, true));
    }

    pub fn release_button(&mut self, number: u8) {
        let t = self.tick();
        self.feed(ControllerEvent::button(t, number, false));
    }

    pub fn move_axis(&mut self, number: u8, value: i16) {
        let t = self.tick();
        self.feed(ControllerEvent::axis(t, number, value));
    }

    /// Number of queued events.
    pub fn pending(&self) -> usize {
        self.events.len()
    }

    fn tick(&mut self) -> u32 {
        self.clock = self.clock.saturating_add(1);
        self.clock
    }
}

impl EventSource for VirtualSource {
    fn next_event(&mut self) -> Result<ControllerEvent> {
        self.events.pop_front().ok_or(Error::Disconnected)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_queue_in_order_with_rising_time() {
        let mut src = VirtualSource::new("virtual:0");
        src.press_button(2);
        src.move_axis(4, -9);
        src.release_button(2);

        assert_eq!(src.next_event().unwrap(), ControllerEvent::button(1, 2, true));
        assert_eq!(src.next_event().unwrap(), ControllerEvent::axis(2, 4, -9));
        assert_eq!(src.next_event().unwrap(), ControllerEvent::button(3, 2, false));
        assert!(matches!(src.next_event(), Err(Error::Disconnected)));
    }

    #[test]
    fn helpers_continue_after_fed_time() {
        let mut src = VirtualSource::new("virtual:0");
        src.feed(ControllerEvent::axis(500, 0, 1));
        src.press_button(0);
        src.next_event().unwrap();
        assert_eq!(src.next_event().unwrap().time, 501);
    }

    #[test]
    fn helpers_never_rewind_time_at_clock_limit() {
        let mut src = VirtualSource::new("virtual:0");
        src.feed(ControllerEvent::axis(u32::MAX, 4, 1));
        src.press_button(0);

        let first = src.next_event().unwrap().time;
        let second = src.next_event().unwrap().time;
        assert_eq!(first, u32::MAX);
        assert_eq!(second, u32::MAX);
    }

    #[test]
    fn feed_bytes_keeps_records_before_error() {
        let mut bytes = codec::encode(&ControllerEvent::button(7, 1, true)).to_vec();
        bytes.push(0);

        let mut src = VirtualSource::new("virtual:bytes");
        assert!(matches!(
            src.feed_bytes(&bytes),
            Err(Error::MalformedInput { len: 1, .. })
        ));
        assert_eq!(src.pending(), 1);
    }
}
