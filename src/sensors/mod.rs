//! Input sampling — buttons, level channel, and the hold-and-release debounce.
//!
//! [`InputSampler::sample`] reads every input once per cycle and produces an
//! [`InputSnapshot`]. When a button is down, the sampler blocks, polling the
//! line every `debounce_poll_ms`, until it reads released. Only then does
//! control return to the classifier, so one physical press yields exactly
//! one condition and its script runs after the finger is lifted.
//!
//! Only the button that wins classification priority is debounced; a
//! lower-priority press held at the same time is simply seen again on a
//! later cycle.
//!
//! With `release_timeout_ms` configured, a line that never releases is
//! declared stuck: it is reported as not pressed and stays ignored until it
//! is observed released once.

pub mod level;

use embedded_hal::delay::DelayNs;
use log::warn;

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, InputPort};
use crate::config::{ADC_MAX, SystemConfig};
use crate::fsm::context::{Button, InputSnapshot};

pub struct InputSampler {
    poll_ms: u32,
    release_timeout_ms: Option<u32>,
    /// Per-button stuck latch, indexed by [`slot`].
    stuck: [bool; 2],
}

impl InputSampler {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            poll_ms: config.debounce_poll_ms,
            release_timeout_ms: config.release_timeout_ms,
            stuck: [false; 2],
        }
    }

    /// Read all inputs; block until the winning button (if any) is released.
    pub fn sample(
        &mut self,
        inputs: &mut impl InputPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> InputSnapshot {
        let mut snapshot = InputSnapshot {
            button_a: self.read_button(inputs, Button::A),
            button_b: self.read_button(inputs, Button::B),
            analog_raw: inputs.read_level_raw().min(ADC_MAX),
        };

        while let Some(button) = first_pressed(&snapshot) {
            if self.wait_for_release(button, inputs, delay) {
                break;
            }
            warn!(
                "Button {:?} held past {:?} ms, ignoring until released",
                button, self.release_timeout_ms
            );
            self.stuck[slot(button)] = true;
            sink.emit(&AppEvent::ButtonStuck(button));
            // The wait took time: classify on live inputs, not the pre-wait ones.
            snapshot = InputSnapshot {
                button_a: self.read_button(inputs, Button::A),
                button_b: self.read_button(inputs, Button::B),
                analog_raw: inputs.read_level_raw().min(ADC_MAX),
            };
        }

        snapshot
    }

    /// Whether `button` is currently latched as stuck.
    pub fn is_stuck(&self, button: Button) -> bool {
        self.stuck[slot(button)]
    }

    // ── Internal ──────────────────────────────────────────────

    fn read_button(&mut self, inputs: &mut impl InputPort, button: Button) -> bool {
        let pressed = inputs.button_pressed(button);
        let latch = &mut self.stuck[slot(button)];
        if *latch {
            if !pressed {
                *latch = false;
            }
            return false;
        }
        pressed
    }

    /// Poll until the line reads released. `false` if the timeout expired.
    fn wait_for_release(
        &self,
        button: Button,
        inputs: &mut impl InputPort,
        delay: &mut impl DelayNs,
    ) -> bool {
        let mut waited_ms: u32 = 0;
        while inputs.button_pressed(button) {
            if let Some(limit) = self.release_timeout_ms {
                if waited_ms >= limit {
                    return false;
                }
            }
            delay.delay_ms(self.poll_ms);
            waited_ms = waited_ms.saturating_add(self.poll_ms);
        }
        true
    }
}

fn slot(button: Button) -> usize {
    match button {
        Button::A => 0,
        Button::B => 1,
    }
}

fn first_pressed(snapshot: &InputSnapshot) -> Option<Button> {
    if snapshot.button_a {
        Some(Button::A)
    } else if snapshot.button_b {
        Some(Button::B)
    } else {
        None
    }
}
