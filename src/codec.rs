//! Fixed 8-byte wire/storage encoding of a [`ControllerEvent`].
//!
//! ```text
//! offset  size  field
//! 0       4     time        (u32, big-endian)
//! 4       2     value       (i16, big-endian)
//! 6       1     event_type
//! 7       1     number
//! ```
//!
//! No version byte, no length prefix. [`decode`] reads the first 8 bytes and
//! ignores anything after them; shorter input is [`Error::MalformedInput`].

use crate::error::{Error, Result};
use crate::event::ControllerEvent;

/// Size in bytes of one encoded event.
pub const EVENT_SIZE: usize = 8;

/// Encode an event into its 8-byte record.
pub fn encode(event: &ControllerEvent) -> [u8; EVENT_SIZE] {
    let mut out = [0u8; EVENT_SIZE];
    out[0..4].copy_from_slice(&event.time.to_be_bytes());
    out[4..6].copy_from_slice(&event.value.to_be_bytes());
    out[6] = event.event_type;
    out[7] = event.number;
    out
}

/// Encode into the first 8 bytes of `buf`.
///
/// Fails with [`Error::MalformedInput`] if `buf` cannot hold a record.
pub fn encode_into(event: &ControllerEvent, buf: &mut [u8]) -> Result<()> {
    let len = buf.len();
    let dst = buf
        .get_mut(..EVENT_SIZE)
        .ok_or_else(|| Error::malformed(len))?;
    dst.copy_from_slice(&encode(event));
    Ok(())
}

/// Decode one event from the first 8 bytes of `bytes`.
pub fn decode(bytes: &[u8]) -> Result<ControllerEvent> {
    let record: &[u8; EVENT_SIZE] = bytes
        .get(..EVENT_SIZE)
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| Error::malformed(bytes.len()))?;
    Ok(decode_record(record))
}

/// Decode an exactly-sized record. Infallible.
pub fn decode_record(record: &[u8; EVENT_SIZE]) -> ControllerEvent {
    ControllerEvent {
        time: u32::from_be_bytes([record[0], record[1], record[2], record[3]]),
        value: i16::from_be_bytes([record[4], record[5]]),
        event_type: record[6],
        number: record[7],
    }
}

/// Iterate over consecutive records packed in `bytes`.
///
/// A trailing partial record yields a single [`Error::MalformedInput`].
pub fn decode_stream(bytes: &[u8]) -> DecodeStream<'_> {
    DecodeStream { rest: bytes }
}

/// Iterator returned by [`decode_stream`].
#[derive(Clone, Debug)]
pub struct DecodeStream<'a> {
    rest: &'a [u8],
}

impl Iterator for DecodeStream<'_> {
    type Item = Result<ControllerEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        if self.rest.len() < EVENT_SIZE {
            let len = self.rest.len();
            self.rest = &[];
            return Some(Err(Error::malformed(len)));
        }
        let (head, tail) = self.rest.split_at(EVENT_SIZE);
        self.rest = tail;
        Some(decode(head))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.rest.len().div_ceil(EVENT_SIZE);
        (n, Some(n))
    }
}
