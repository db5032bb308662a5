//! Read → decode → fold loop for a single controller.

use crate::config::ControllerConfig;
use crate::device::EventSource;
use crate::error::Result;
use crate::event::ControllerEvent;
use crate::machine::StateMachine;
use crate::observer::{LogObserver, StateObserver};
use crate::snapshot::Snapshot;
use crate::state::ControllerState;

/// Owns one event source, the state machine, and the state it folds into.
///
/// Events are handled strictly one at a time: each call to [`Controller::poll`]
/// reads one event and fully applies it before returning.
#[derive(Debug)]
pub struct Controller<S: EventSource> {
    source: S,
    machine: StateMachine,
    state: ControllerState,
    last_time: u32,
}

impl<S: EventSource> Controller<S> {
    /// Wrap `source` with a default state machine and a reset state.
    pub fn new(source: S) -> Self {
        Self::with_machine(source, StateMachine::new())
    }

    pub fn with_machine(source: S, machine: StateMachine) -> Self {
        log::debug!("Controller on {} with {:?}", source.name(), machine);
        Self {
            source,
            machine,
            state: ControllerState::default(),
            last_time: 0,
        }
    }

    /// Build from config around an already-open source.
    pub fn with_config(source: S, config: &ControllerConfig) -> Self {
        let mut machine = StateMachine::with_deadzone(config.deadzone);
        if config.log_changes {
            machine.add_observer(LogObserver::new());
        }
        Self::with_machine(source, machine)
    }

    pub fn add_observer(&mut self, observer: impl StateObserver + 'static) {
        self.machine.add_observer(observer);
    }

    /// Read one event (blocking on real devices) and fold it into the state.
    pub fn poll(&mut self) -> Result<ControllerEvent> {
        let event = self.source.next_event()?;
        self.machine.apply(&mut self.state, &event);
        self.last_time = event.time;
        Ok(event)
    }

    /// Poll until the source reports an error, returning how many events were
    /// applied alongside that error.
    pub fn drain(&mut self) -> (usize, crate::error::Error) {
        let mut applied = 0;
        loop {
            match self.poll() {
                Ok(_) => applied += 1,
                Err(e) => return (applied, e),
            }
        }
    }

    #[inline]
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.last_time, self.state)
    }

    /// Clear the state, e.g. after reconnecting the device.
    pub fn reset(&mut self) {
        log::debug!("Resetting state for {}", self.source.name());
        self.machine.reset(&mut self.state);
        self.last_time = 0;
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Give back the source; the state is dropped.
    pub fn into_source(self) -> S {
        self.source
    }
}

#[cfg(all(feature = "joystick", target_os = "linux"))]
impl Controller<crate::backends::joystick::JoystickDevice> {
    /// Open the configured joystick node.
    pub fn from_config(config: &ControllerConfig) -> Result<Self> {
        let device = crate::backends::joystick::JoystickDevice::open(&config.device)?;
        Ok(Self::with_config(device, config))
    }
}
