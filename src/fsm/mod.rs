//! Sensing-to-actuation state machine.
//!
//! ```text
//!  InputSnapshot ──▶ Classifier ──▶ Condition ──▶ steps table ──▶ Sequencer
//!
//!  priority:  button A  >  button B  >  analog > threshold  >  None
//! ```
//!
//! Every cycle the [`Classifier`] picks at most one [`Condition`]. The
//! condition selects a static script from [`steps`], and the
//! [`sequencer::Sequencer`] replays it against the hardware ports. No state
//! survives between cycles except the physical outputs.

pub mod context;
pub mod sequencer;
pub mod steps;

use context::InputSnapshot;

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// What the controller reacts to in a given cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Condition {
    /// Nothing to do this cycle.
    None = 0,
    /// Button A: tank at 50%, pump engaged until full.
    ButtonAHalfLevel = 1,
    /// Button B: tank at 25%, the 50% refill was missed, pump re-engaged.
    ButtonBQuarterLevel = 2,
    /// Level channel above threshold: pump malfunction.
    AnalogFault = 3,
}

impl Condition {
    /// Number of conditions; sizes per-condition counters.
    pub const COUNT: usize = 4;

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::ButtonAHalfLevel => "ButtonA/50%",
            Self::ButtonBQuarterLevel => "ButtonB/25%",
            Self::AnalogFault => "AnalogFault",
        }
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Fixed-priority mapping from a snapshot to a [`Condition`].
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    fault_threshold: u16,
}

impl Classifier {
    pub fn new(fault_threshold: u16) -> Self {
        Self { fault_threshold }
    }

    /// Pick the single condition to act on this cycle.
    pub fn classify(&self, snapshot: &InputSnapshot) -> Condition {
        if snapshot.button_a {
            Condition::ButtonAHalfLevel
        } else if snapshot.button_b {
            Condition::ButtonBQuarterLevel
        } else if snapshot.analog_raw > self.fault_threshold {
            Condition::AnalogFault
        } else {
            Condition::None
        }
    }
}
