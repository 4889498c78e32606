//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns every driver and exposes them through [`InputPort`],
//! [`ActuatorPort`] and [`DisplayPort`]. This is the only module in the
//! system that touches actual hardware. Drivers are generic over
//! embedded-hal traits: `main` plugs in esp-idf-hal pins, tests plug in
//! mocks.
//!
//! Driver errors stop here. They are logged and the domain carries on
//! with a safe interpretation (a button that cannot be read is released).

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::i2c::I2c;
use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::app::ports::{ActuatorPort, DisplayPort, InputPort};
use crate::drivers::button::ButtonDriver;
use crate::drivers::buzzer::Buzzer;
use crate::drivers::display::TextDisplay;
use crate::drivers::pump::PumpDriver;
use crate::drivers::status_led::StatusLeds;
use crate::error::DisplayError;
use crate::fsm::context::{Button, Led};
use crate::sensors::level::LevelSensor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<BA, BB, R, B, Y, P, Z, I2C> {
    button_a: ButtonDriver<BA>,
    button_b: ButtonDriver<BB>,
    level: LevelSensor,
    leds: StatusLeds<R, B, Y>,
    pump: PumpDriver<P>,
    buzzer: Buzzer<Z>,
    display: TextDisplay<I2C>,
}

impl<BA, BB, R, B, Y, P, Z, I2C> HardwareAdapter<BA, BB, R, B, Y, P, Z, I2C>
where
    BA: InputPin,
    BB: InputPin,
    R: OutputPin,
    B: OutputPin,
    Y: OutputPin,
    P: OutputPin,
    Z: SetDutyCycle,
    I2C: I2c,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        button_a: ButtonDriver<BA>,
        button_b: ButtonDriver<BB>,
        level: LevelSensor,
        leds: StatusLeds<R, B, Y>,
        pump: PumpDriver<P>,
        buzzer: Buzzer<Z>,
        display: TextDisplay<I2C>,
    ) -> Self {
        Self {
            button_a,
            button_b,
            level,
            leds,
            pump,
            buzzer,
            display,
        }
    }

    pub fn is_pump_running(&self) -> bool {
        self.pump.is_running()
    }

    pub fn is_buzzer_active(&self) -> bool {
        self.buzzer.is_active()
    }

    pub fn is_led_on(&self, led: Led) -> bool {
        self.leds.is_on(led)
    }
}

// ── InputPort implementation ──────────────────────────────────

impl<BA, BB, R, B, Y, P, Z, I2C> InputPort for HardwareAdapter<BA, BB, R, B, Y, P, Z, I2C>
where
    BA: InputPin,
    BB: InputPin,
    R: OutputPin,
    B: OutputPin,
    Y: OutputPin,
    P: OutputPin,
    Z: SetDutyCycle,
    I2C: I2c,
{
    fn button_pressed(&mut self, button: Button) -> bool {
        let result = match button {
            Button::A => self.button_a.is_pressed(),
            Button::B => self.button_b.is_pressed(),
        };
        result.unwrap_or_else(|e| {
            warn!("Button {:?}: {}", button, e);
            false
        })
    }

    fn read_level_raw(&mut self) -> u16 {
        self.level.read()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<BA, BB, R, B, Y, P, Z, I2C> ActuatorPort for HardwareAdapter<BA, BB, R, B, Y, P, Z, I2C>
where
    BA: InputPin,
    BB: InputPin,
    R: OutputPin,
    B: OutputPin,
    Y: OutputPin,
    P: OutputPin,
    Z: SetDutyCycle,
    I2C: I2c,
{
    fn set_led(&mut self, led: Led, on: bool) {
        if let Err(e) = self.leds.set(led, on) {
            warn!("LED {:?}: {}", led, e);
        }
    }

    fn set_pump(&mut self, on: bool) {
        if let Err(e) = self.pump.set(on) {
            warn!("Pump relay: {}", e);
        }
    }

    fn set_buzzer(&mut self, active: bool) {
        let result = if active {
            self.buzzer.start()
        } else {
            self.buzzer.stop()
        };
        if let Err(e) = result {
            warn!("Buzzer: {}", e);
        }
    }

    fn all_off(&mut self) {
        if let Err(e) = self.pump.stop() {
            warn!("Pump relay: {}", e);
        }
        if let Err(e) = self.buzzer.stop() {
            warn!("Buzzer: {}", e);
        }
        if let Err(e) = self.leds.off() {
            warn!("LEDs: {}", e);
        }
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl<BA, BB, R, B, Y, P, Z, I2C> DisplayPort for HardwareAdapter<BA, BB, R, B, Y, P, Z, I2C>
where
    BA: InputPin,
    BB: InputPin,
    R: OutputPin,
    B: OutputPin,
    Y: OutputPin,
    P: OutputPin,
    Z: SetDutyCycle,
    I2C: I2c,
{
    fn render_lines(&mut self, lines: &[&str]) -> Result<(), DisplayError> {
        self.display.show(lines)
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.display.clear()
    }
}
