//! Outbound application events.
//!
//! The [`ControlLoop`](super::control_loop::ControlLoop) emits these through
//! the [`EventSink`](super::ports::EventSink) port. The firmware only logs
//! them; tests collect them.

use crate::fsm::Condition;
use crate::fsm::context::{Button, InputSnapshot};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Outputs forced off and the panel blanked; polling begins.
    Started,

    /// The classifier picked a condition and its sequence is about to run.
    ConditionDetected {
        condition: Condition,
        snapshot: InputSnapshot,
    },

    /// A sequence ran to completion. `elapsed_ms` is the scripted sleep time.
    SequenceCompleted { condition: Condition, elapsed_ms: u32 },

    /// A button stayed pressed past the release timeout and was ignored.
    ButtonStuck(Button),
}
