//! Step-list interpreter.
//!
//! Replays a [`Step`] script against the actuator and display ports,
//! blocking on the injected delay. Keeps a mirror of every output and of the
//! panel so the control loop can report what the hardware shows without
//! reading pins back.
//!
//! A failing display never aborts a script: the error is logged and the
//! remaining steps still run, so the pump and LEDs always reach the state
//! the script ends in.

use embedded_hal::delay::DelayNs;
use log::{debug, warn};

use super::Condition;
use super::context::{ActuationOutputs, DisplayState};
use super::steps::{FULL_TANK, Step, sequence_for};
use crate::app::ports::{ActuatorPort, DisplayPort};

pub struct Sequencer {
    tone_pad_ms: u32,
    outputs: ActuationOutputs,
    display: DisplayState,
}

impl Sequencer {
    pub fn new(tone_pad_ms: u32) -> Self {
        Self {
            tone_pad_ms,
            outputs: ActuationOutputs::all_off(),
            display: DisplayState::new(),
        }
    }

    /// Run the script for `condition` to completion.
    /// Returns the milliseconds spent sleeping.
    pub fn run(
        &mut self,
        condition: Condition,
        hw: &mut (impl ActuatorPort + DisplayPort),
        delay: &mut impl DelayNs,
    ) -> u32 {
        debug!("SEQ | {} begin", condition.name());
        self.run_steps(sequence_for(condition), hw, delay)
    }

    /// Run an arbitrary script. Returns the milliseconds spent sleeping.
    pub fn run_steps(
        &mut self,
        steps: &[Step],
        hw: &mut (impl ActuatorPort + DisplayPort),
        delay: &mut impl DelayNs,
    ) -> u32 {
        let mut elapsed_ms = 0;
        for step in steps {
            elapsed_ms = self.execute(*step, hw, delay).saturating_add(elapsed_ms);
        }
        elapsed_ms
    }

    /// Force every output off and blank the panel.
    pub fn reset(&mut self, hw: &mut (impl ActuatorPort + DisplayPort)) {
        hw.all_off();
        self.outputs = ActuationOutputs::all_off();
        self.clear_display(hw);
    }

    pub fn outputs(&self) -> ActuationOutputs {
        self.outputs
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    // ── Internal ──────────────────────────────────────────────

    fn execute(
        &mut self,
        step: Step,
        hw: &mut (impl ActuatorPort + DisplayPort),
        delay: &mut impl DelayNs,
    ) -> u32 {
        match step {
            Step::ClearDisplay => {
                self.clear_display(hw);
                0
            }
            Step::Show(lines) => {
                if let Err(e) = hw.render_lines(lines) {
                    warn!("Display render failed: {}", e);
                }
                self.display.show(lines);
                0
            }
            Step::Led(led, on) => {
                hw.set_led(led, on);
                self.outputs.set_led(led, on);
                0
            }
            Step::Pump(on) => {
                hw.set_pump(on);
                self.outputs.pump_enabled = on;
                0
            }
            Step::Tone(ms) => {
                hw.set_buzzer(true);
                self.outputs.buzzer_active = true;
                delay.delay_ms(ms);
                hw.set_buzzer(false);
                self.outputs.buzzer_active = false;
                delay.delay_ms(self.tone_pad_ms);
                ms.saturating_add(self.tone_pad_ms)
            }
            Step::Hold(ms) => {
                delay.delay_ms(ms);
                ms
            }
            Step::Blink {
                led,
                times,
                on_ms,
                off_ms,
            } => {
                for _ in 0..times {
                    hw.set_led(led, true);
                    self.outputs.set_led(led, true);
                    delay.delay_ms(on_ms);
                    hw.set_led(led, false);
                    self.outputs.set_led(led, false);
                    delay.delay_ms(off_ms);
                }
                u32::from(times).saturating_mul(on_ms.saturating_add(off_ms))
            }
            Step::FullTank => self.run_steps(FULL_TANK, hw, delay),
        }
    }

    fn clear_display(&mut self, hw: &mut impl DisplayPort) {
        if let Err(e) = hw.clear() {
            warn!("Display clear failed: {}", e);
        }
        self.display.clear();
    }
}
