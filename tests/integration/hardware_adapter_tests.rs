//! HardwareAdapter over real drivers and embedded-hal mock peripherals.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{self, InputPin, OutputPin};
use embedded_hal::i2c::{self, I2c, Operation};
use embedded_hal::pwm::{self, SetDutyCycle};
use tankpump::adapters::hardware::HardwareAdapter;
use tankpump::app::control_loop::ControlLoop;
use tankpump::app::ports::{ActuatorPort, DisplayPort, InputPort};
use tankpump::config::SystemConfig;
use tankpump::drivers::button::ButtonDriver;
use tankpump::drivers::buzzer::Buzzer;
use tankpump::drivers::display::TextDisplay;
use tankpump::drivers::pump::PumpDriver;
use tankpump::drivers::status_led::StatusLeds;
use tankpump::error::DisplayError;
use tankpump::fsm::Condition;
use tankpump::fsm::context::{Button, Led};
use tankpump::sensors::level::{LevelSensor, sim_set_level_raw};

use super::mock_hw::{MockClock, MockDelay, RecordingSink};

// ── Mock peripherals ──────────────────────────────────────────

/// GPIO line shared between the driver and the test; `true` = high.
#[derive(Clone, Default)]
struct Pin(Rc<Cell<bool>>);

impl Pin {
    fn high() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
    fn is_set(&self) -> bool {
        self.0.get()
    }
}

impl digital::ErrorType for Pin {
    type Error = Infallible;
}

impl InputPin for Pin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.get())
    }
    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.0.get())
    }
}

impl OutputPin for Pin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set(false);
        Ok(())
    }
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set(true);
        Ok(())
    }
}

#[derive(Clone, Default)]
struct Pwm(Rc<Cell<u16>>);

impl pwm::ErrorType for Pwm {
    type Error = Infallible;
}

impl SetDutyCycle for Pwm {
    fn max_duty_cycle(&self) -> u16 {
        1000
    }
    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
        self.0.set(duty);
        Ok(())
    }
}

#[derive(Clone, Default)]
struct Bus {
    writes: Rc<Cell<usize>>,
    fail: bool,
}

impl i2c::ErrorType for Bus {
    type Error = i2c::ErrorKind;
}

impl I2c for Bus {
    fn transaction(
        &mut self,
        _address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), i2c::ErrorKind> {
        if self.fail {
            return Err(i2c::ErrorKind::Other);
        }
        self.writes.set(self.writes.get() + operations.len());
        Ok(())
    }
}

// ── Board ─────────────────────────────────────────────────────

struct Board {
    button_a: Pin,
    button_b: Pin,
    red: Pin,
    blue: Pin,
    yellow: Pin,
    pump: Pin,
    buzzer: Pwm,
    bus: Bus,
}

impl Board {
    fn new() -> Self {
        Self {
            button_a: Pin::high(),
            button_b: Pin::high(),
            red: Pin::default(),
            blue: Pin::default(),
            yellow: Pin::default(),
            pump: Pin::default(),
            buzzer: Pwm::default(),
            bus: Bus::default(),
        }
    }

    fn adapter(&self) -> HardwareAdapter<Pin, Pin, Pin, Pin, Pin, Pin, Pwm, Bus> {
        HardwareAdapter::new(
            ButtonDriver::new(Button::A, self.button_a.clone()),
            ButtonDriver::new(Button::B, self.button_b.clone()),
            LevelSensor::new(3),
            StatusLeds::new(self.red.clone(), self.blue.clone(), self.yellow.clone()),
            PumpDriver::new(self.pump.clone()),
            Buzzer::new(self.buzzer.clone(), 50),
            TextDisplay::new(self.bus.clone()),
        )
    }

    fn all_outputs_low(&self) -> bool {
        !self.red.is_set()
            && !self.blue.is_set()
            && !self.yellow.is_set()
            && !self.pump.is_set()
            && self.buzzer.0.get() == 0
    }
}

// ── Tests ─────────────────────────────────────────────────────

#[test]
fn button_lines_are_active_low() {
    let board = Board::new();
    let mut hw = board.adapter();

    assert!(!hw.button_pressed(Button::A));
    board.button_a.0.set(false);
    assert!(hw.button_pressed(Button::A));
    assert!(!hw.button_pressed(Button::B));
}

#[test]
fn actuator_port_drives_pins_and_pwm() {
    let board = Board::new();
    let mut hw = board.adapter();

    hw.set_led(Led::Yellow, true);
    hw.set_pump(true);
    hw.set_buzzer(true);
    assert!(board.yellow.is_set());
    assert!(!board.red.is_set());
    assert!(board.pump.is_set());
    assert_eq!(board.buzzer.0.get(), 500);
    assert!(hw.is_pump_running());
    assert!(hw.is_buzzer_active());
    assert!(hw.is_led_on(Led::Yellow));

    hw.all_off();
    assert!(board.all_outputs_low());
    assert!(!hw.is_pump_running());
}

#[test]
fn display_port_reaches_the_bus() {
    let board = Board::new();
    let mut hw = board.adapter();

    hw.render_lines(&["Tank full"]).unwrap();
    assert!(board.bus.writes.get() > 0);
}

#[test]
fn display_bus_error_is_reported() {
    let mut board = Board::new();
    board.bus.fail = true;
    let mut hw = board.adapter();

    assert_eq!(hw.render_lines(&["x"]), Err(DisplayError::Bus));
    assert_eq!(hw.clear(), Err(DisplayError::Bus));
}

#[test]
fn fault_cycle_on_real_drivers_leaves_board_safe() {
    let board = Board::new();
    let mut hw = board.adapter();
    let clock = MockClock::default();
    let mut delay = MockDelay::new(&clock);
    let mut sink = RecordingSink::default();
    let mut app = ControlLoop::new(SystemConfig::default());

    sim_set_level_raw(3000);
    app.start(&mut hw, &mut sink);
    let condition = app.tick(&mut hw, &mut delay, &mut sink);
    sim_set_level_raw(0);

    assert_eq!(condition, Condition::AnalogFault);
    assert!(board.all_outputs_low());
    assert!(board.bus.writes.get() > 0);
}
