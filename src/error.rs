//! Crate error type.
//!
//! The decoding core raises exactly one error of its own,
//! [`Error::MalformedInput`]. The remaining variants belong to the event
//! sources and the configuration loader and are passed through untouched.

use thiserror::Error;

/// Errors surfaced by decoding, event sources, and config loading.
#[derive(Debug, Error)]
pub enum Error {
    /// A buffer was too short to hold one 8-byte event record.
    #[error("malformed input: expected at least {expected} bytes, got {len}")]
    MalformedInput { len: usize, expected: usize },

    /// The underlying device read or open failed.
    #[error("device I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source has no more events (device unplugged, EOF, or empty queue).
    #[error("event source disconnected")]
    Disconnected,

    /// The TOML configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn malformed(len: usize) -> Self {
        Error::MalformedInput {
            len,
            expected: crate::codec::EVENT_SIZE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
