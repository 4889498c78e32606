//! Water pump relay driver.
//!
//! A single GPIO energises the relay coil that switches the pump mains.
//! On/off only; the scripts decide when. This driver is a dumb actuator.

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::ActuatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpState {
    Stopped,
    Running,
}

pub struct PumpDriver<P> {
    relay: P,
    state: PumpState,
}

impl<P: OutputPin> PumpDriver<P> {
    pub fn new(relay: P) -> Self {
        Self {
            relay,
            state: PumpState::Stopped,
        }
    }

    pub fn set(&mut self, on: bool) -> Result<(), ActuatorError> {
        self.relay
            .set_state(PinState::from(on))
            .map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.state = if on { PumpState::Running } else { PumpState::Stopped };
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), ActuatorError> {
        self.set(false)
    }

    pub fn state(&self) -> PumpState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PumpState::Running
    }
}
