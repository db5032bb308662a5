//! Field-change observers.
//!
//! The [`StateMachine`](crate::machine::StateMachine) notifies every registered
//! [`StateObserver`] after it writes a field. Events that land in the deadzone,
//! or address an unknown index, write nothing and notify nobody.

use crate::state::{Axis, Button};

/// A single field write performed by the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldChange {
    /// A button field was written.
    Button {
        button: Button,
        pressed: bool,
        time: u32,
    },
    /// An axis field was written.
    Axis { axis: Axis, value: i16, time: u32 },
}

impl FieldChange {
    /// Timestamp of the event that caused the write.
    pub fn time(&self) -> u32 {
        match *self {
            FieldChange::Button { time, .. } | FieldChange::Axis { time, .. } => time,
        }
    }
}

/// Trait for reacting to state mutations.
pub trait StateObserver: Send {
    fn on_change(&mut self, change: &FieldChange);
}

impl<F> StateObserver for F
where
    F: FnMut(&FieldChange) + Send,
{
    fn on_change(&mut self, change: &FieldChange) {
        self(change)
    }
}

/// Logs every field write through the `log` facade at `debug` level.
#[derive(Debug, Default)]
pub struct LogObserver;

impl LogObserver {
    pub fn new() -> Self {
        LogObserver
    }
}

impl StateObserver for LogObserver {
    fn on_change(&mut self, change: &FieldChange) {
        match *change {
            FieldChange::Button {
                button,
                pressed,
                time,
            } => log::debug!("[STATE] t={time} {} = {pressed}", button.name()),
            FieldChange::Axis { axis, value, time } => {
                log::debug!("[STATE] t={time} {} = {value}", axis.name())
            }
        }
    }
}

/// Wraps an observer and forwards only changes matching a predicate.
pub struct FilteredObserver {
    predicate: Box<dyn Fn(&FieldChange) -> bool + Send + Sync>,
    inner: Box<dyn StateObserver>,
}

impl FilteredObserver {
    pub fn new(
        predicate: impl Fn(&FieldChange) -> bool + Send + Sync + 'static,
        inner: Box<dyn StateObserver>,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            inner,
        }
    }

    /// Forward only button changes.
    pub fn buttons_only(inner: Box<dyn StateObserver>) -> Self {
        Self::new(|c| matches!(c, FieldChange::Button { .. }), inner)
    }

    /// Forward only axis changes.
    pub fn axes_only(inner: Box<dyn StateObserver>) -> Self {
        Self::new(|c| matches!(c, FieldChange::Axis { .. }), inner)
    }
}

impl StateObserver for FilteredObserver {
    fn on_change(&mut self, change: &FieldChange) {
        if (self.predicate)(change) {
            self.inner.on_change(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn log_observer_accepts_both_kinds() {
        let mut obs = LogObserver::new();
        obs.on_change(&FieldChange::Button {
            button: Button::Guide,
            pressed: true,
            time: 1,
        });
        obs.on_change(&FieldChange::Axis {
            axis: Axis::RTrigger,
            value: i16::MIN,
            time: 2,
        });
    }

    #[test]
    fn filtered_observer_drops_non_matching() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut obs = FilteredObserver::buttons_only(Box::new(move |c: &FieldChange| {
            sink.lock().unwrap().push(*c);
        }));

        obs.on_change(&FieldChange::Axis {
            axis: Axis::DPadX,
            value: 1,
            time: 1,
        });
        obs.on_change(&FieldChange::Button {
            button: Button::Start,
            pressed: true,
            time: 2,
        });

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].time(), 2);
    }
}
