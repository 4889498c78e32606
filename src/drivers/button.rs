//! Active-low push-button input.
//!
//! ## Hardware
//!
//! Momentary switch to ground with the GPIO's internal pull-up enabled:
//! the line reads HIGH at rest and LOW while pressed. No ISR; the control
//! loop polls the level, and the hold-and-release debounce lives in the
//! sampler.

use embedded_hal::digital::InputPin;

use crate::error::SensorError;
use crate::fsm::context::Button;

pub struct ButtonDriver<P> {
    button: Button,
    pin: P,
}

impl<P: InputPin> ButtonDriver<P> {
    pub fn new(button: Button, pin: P) -> Self {
        Self { button, pin }
    }

    /// Which operator button this line carries.
    pub fn button(&self) -> Button {
        self.button
    }

    /// `true` while the line reads low.
    pub fn is_pressed(&mut self) -> Result<bool, SensorError> {
        self.pin.is_low().map_err(|_| SensorError::GpioReadFailed)
    }
}
