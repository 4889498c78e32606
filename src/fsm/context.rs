//! Values that flow through one control cycle.
//!
//! [`InputSnapshot`] is what the sampler hands the classifier;
//! [`ActuationOutputs`] and [`DisplayState`] are the sequencer's mirror of
//! what the pins and the panel currently show. Nothing here outlives the
//! physical output state between cycles.

use heapless::{String, Vec};

// ---------------------------------------------------------------------------
// Identities
// ---------------------------------------------------------------------------

/// Operator push-buttons, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Tank at 50%: engage the pump.
    A,
    /// Tank at 25%: the 50% refill never happened, engage again.
    B,
}

/// Discrete status LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Led {
    Red,
    Blue,
    Yellow,
}

// ---------------------------------------------------------------------------
// Input snapshot (written by the sampler; read by the classifier)
// ---------------------------------------------------------------------------

/// A point-in-time view of every input the controller reacts to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Button A line read low.
    pub button_a: bool,
    /// Button B line read low.
    pub button_b: bool,
    /// Raw 12-bit level reading (0 – 4095).
    pub analog_raw: u16,
}

impl InputSnapshot {
    pub fn pressed(&self, button: Button) -> bool {
        match button {
            Button::A => self.button_a,
            Button::B => self.button_b,
        }
    }
}

// ---------------------------------------------------------------------------
// Actuator mirror (written by the sequencer)
// ---------------------------------------------------------------------------

/// Last level commanded on every output pin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActuationOutputs {
    pub pump_enabled: bool,
    pub led_red: bool,
    pub led_blue: bool,
    pub led_yellow: bool,
    pub buzzer_active: bool,
}

impl ActuationOutputs {
    /// Everything de-energised (boot state).
    pub fn all_off() -> Self {
        Self::default()
    }

    pub fn led(&self, led: Led) -> bool {
        match led {
            Led::Red => self.led_red,
            Led::Blue => self.led_blue,
            Led::Yellow => self.led_yellow,
        }
    }

    pub fn set_led(&mut self, led: Led, on: bool) {
        match led {
            Led::Red => self.led_red = on,
            Led::Blue => self.led_blue = on,
            Led::Yellow => self.led_yellow = on,
        }
    }

    pub fn any_led_on(&self) -> bool {
        self.led_red || self.led_blue || self.led_yellow
    }
}

// ---------------------------------------------------------------------------
// Display mirror
// ---------------------------------------------------------------------------

/// Text rows that fit the 128×64 panel with an 8-pixel font.
pub const MAX_LINES: usize = 8;
/// Characters per row kept in the mirror (5-pixel glyphs from x = 5).
pub const LINE_CHARS: usize = 24;

pub type DisplayLine = String<LINE_CHARS>;

/// Ordered lines currently on the panel. Empty means blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    lines: Vec<DisplayLine, MAX_LINES>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Replace the contents. Rows past [`MAX_LINES`] and characters past
    /// [`LINE_CHARS`] do not fit the panel and are dropped.
    pub fn show(&mut self, lines: &[&str]) {
        self.lines.clear();
        for text in lines.iter().take(MAX_LINES) {
            let mut line = DisplayLine::new();
            for ch in text.chars() {
                if line.push(ch).is_err() {
                    break;
                }
            }
            // Capacity is MAX_LINES and `take` bounds the iteration.
            let _ = self.lines.push(line);
        }
    }

    pub fn is_blank(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
