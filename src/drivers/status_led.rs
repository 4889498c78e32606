//! Discrete status LED driver.
//!
//! Three GPIO outputs drive the red, blue and yellow LEDs directly
//! (active HIGH). The driver remembers the last commanded level of each.

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::ActuatorError;
use crate::fsm::context::Led;

pub struct StatusLeds<R, B, Y> {
    red: R,
    blue: B,
    yellow: Y,
    lit: [bool; 3],
}

impl<R: OutputPin, B: OutputPin, Y: OutputPin> StatusLeds<R, B, Y> {
    pub fn new(red: R, blue: B, yellow: Y) -> Self {
        Self {
            red,
            blue,
            yellow,
            lit: [false; 3],
        }
    }

    pub fn set(&mut self, led: Led, on: bool) -> Result<(), ActuatorError> {
        let state = PinState::from(on);
        let result = match led {
            Led::Red => self.red.set_state(state).map_err(|_| ActuatorError::GpioWriteFailed),
            Led::Blue => self.blue.set_state(state).map_err(|_| ActuatorError::GpioWriteFailed),
            Led::Yellow => self.yellow.set_state(state).map_err(|_| ActuatorError::GpioWriteFailed),
        };
        if result.is_ok() {
            self.lit[index(led)] = on;
        }
        result
    }

    /// Switch all three off. Attempts every LED even if one fails.
    pub fn off(&mut self) -> Result<(), ActuatorError> {
        let red = self.set(Led::Red, false);
        let blue = self.set(Led::Blue, false);
        let yellow = self.set(Led::Yellow, false);
        red.and(blue).and(yellow)
    }

    pub fn is_on(&self, led: Led) -> bool {
        self.lit[index(led)]
    }
}

fn index(led: Led) -> usize {
    match led {
        Led::Red => 0,
        Led::Blue => 1,
        Led::Yellow => 2,
    }
}
