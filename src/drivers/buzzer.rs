//! Passive buzzer on a PWM channel.
//!
//! The carrier frequency is fixed by the LEDC timer set up in `main`
//! (100 Hz). Sounding the buzzer means driving a square wave at the
//! configured duty; silencing it means duty 0. Tone timing belongs to the
//! sequencer.

use embedded_hal::pwm::SetDutyCycle;

use crate::error::ActuatorError;

pub struct Buzzer<P> {
    pwm: P,
    duty_percent: u8,
    active: bool,
}

impl<P: SetDutyCycle> Buzzer<P> {
    pub fn new(pwm: P, duty_percent: u8) -> Self {
        Self {
            pwm,
            duty_percent: duty_percent.min(100),
            active: false,
        }
    }

    pub fn start(&mut self) -> Result<(), ActuatorError> {
        self.pwm
            .set_duty_cycle_percent(self.duty_percent)
            .map_err(|_| ActuatorError::PwmWriteFailed)?;
        self.active = true;
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), ActuatorError> {
        self.pwm
            .set_duty_cycle_fully_off()
            .map_err(|_| ActuatorError::PwmWriteFailed)?;
        self.active = false;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
