//! Control loop — the hexagonal core.
//!
//! [`ControlLoop`] owns the sampler, classifier, and sequencer. One call to
//! [`ControlLoop::tick`] is one polling cycle; the firmware calls it
//! forever. All I/O flows through port traits injected at call sites, so
//! the entire loop runs against mock adapters and a mock clock in tests.
//!
//! ```text
//!   InputPort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                 │         ControlLoop          │
//! ActuatorPort ◀──│ Sampler · Classifier · Steps │
//!  DisplayPort ◀──└──────────────────────────────┘
//! ```
//!
//! The hardware adapter is borrowed mutably for the whole cycle, so a
//! running script is an atomic unit with respect to pins and the panel.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::config::SystemConfig;
use crate::fsm::context::{ActuationOutputs, DisplayState};
use crate::fsm::sequencer::Sequencer;
use crate::fsm::{Classifier, Condition};
use crate::sensors::InputSampler;

use super::events::AppEvent;
use super::ports::{ActuatorPort, DisplayPort, EventSink, InputPort};

// ───────────────────────────────────────────────────────────────
// ControlLoop
// ───────────────────────────────────────────────────────────────

pub struct ControlLoop {
    config: SystemConfig,
    sampler: InputSampler,
    classifier: Classifier,
    sequencer: Sequencer,
    cycle_count: u64,
    /// Completed scripts per condition, indexed by `Condition as usize`.
    fired: [u32; Condition::COUNT],
}

impl ControlLoop {
    /// Construct the loop from configuration.
    ///
    /// Does **not** touch hardware; call [`start`](Self::start) next.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            sampler: InputSampler::new(&config),
            classifier: Classifier::new(config.analog_fault_threshold),
            sequencer: Sequencer::new(config.tone_pad_ms),
            config,
            cycle_count: 0,
            fired: [0; Condition::COUNT],
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Force every output off and blank the panel.
    pub fn start(&mut self, hw: &mut (impl ActuatorPort + DisplayPort), sink: &mut impl EventSink) {
        self.sequencer.reset(hw);
        sink.emit(&AppEvent::Started);
        info!(
            "ControlLoop started (fault threshold {}, cycle {} ms)",
            self.config.analog_fault_threshold, self.config.cycle_interval_ms
        );
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full cycle: sample → classify → script → inter-cycle sleep.
    ///
    /// Returns the condition acted on. Blocks for the button release and
    /// for the whole script.
    pub fn tick(
        &mut self,
        hw: &mut (impl InputPort + ActuatorPort + DisplayPort),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> Condition {
        self.cycle_count += 1;

        // 1. Sample (debounces the winning button)
        let snapshot = self.sampler.sample(hw, delay, sink);

        // 2. Classify
        let condition = self.classifier.classify(&snapshot);

        // 3. Replay the script
        if condition != Condition::None {
            sink.emit(&AppEvent::ConditionDetected { condition, snapshot });
            let elapsed_ms = self.sequencer.run(condition, hw, delay);
            self.fired[condition as usize] += 1;
            sink.emit(&AppEvent::SequenceCompleted {
                condition,
                elapsed_ms,
            });
        }

        // 4. Pace the polling
        delay.delay_ms(self.config.cycle_interval_ms);

        condition
    }

    /// Tick forever.
    pub fn run(
        &mut self,
        hw: &mut (impl InputPort + ActuatorPort + DisplayPort),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> ! {
        loop {
            self.tick(hw, delay, sink);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Output levels as last commanded.
    pub fn outputs(&self) -> ActuationOutputs {
        self.sequencer.outputs()
    }

    /// Panel contents as last rendered.
    pub fn display(&self) -> &DisplayState {
        self.sequencer.display()
    }

    /// Total cycles executed since construction.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// How many times `condition`'s script has completed.
    pub fn fire_count(&self, condition: Condition) -> u32 {
        self.fired[condition as usize]
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }
}
