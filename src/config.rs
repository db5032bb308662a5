//! Controller configuration.
//!
//! Loaded from TOML; every key is optional:
//!
//! ```toml
//! device = "/dev/input/js0"
//! deadzone = 200
//! log_changes = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::machine::DEFAULT_DEADZONE;

fn default_device() -> PathBuf {
    PathBuf::from("/dev/input/js0")
}

fn default_deadzone() -> i16 {
    DEFAULT_DEADZONE
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Joystick node to read from.
    pub device: PathBuf,
    /// Deadzone for the filtered axes (LStickX, LStickY, LTrigger, RStickY).
    pub deadzone: i16,
    /// Attach a [`LogObserver`](crate::observer::LogObserver) to the state machine.
    pub log_changes: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            device: default_device(),
            deadzone: default_deadzone(),
            log_changes: false,
        }
    }
}

impl ControllerConfig {
    /// Parse from a TOML string.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded controller config from {}", path.as_ref().display());
        Self::from_toml(&text)
    }
}
