//! Fuzz target: `ControlLoop::tick` over arbitrary input histories
//!
//! Every 4-byte chunk is one cycle: a flags byte (bit 0 = A, bit 1 = B,
//! bits 2..=5 = extra polls the pressed button stays down), one unused
//! byte, then a little-endian raw level.
//!
//! Invariants checked:
//! - No panics under any byte sequence
//! - The condition acted on matches the priority rule for the sampled inputs
//! - Every cycle ends with all LEDs, pump and buzzer off and the panel blank
//!
//! cargo fuzz run fuzz_control_cycle

#![no_main]

use embedded_hal::delay::DelayNs;
use libfuzzer_sys::fuzz_target;
use tankpump::app::events::AppEvent;
use tankpump::app::ports::{ActuatorPort, DisplayPort, EventSink, InputPort};
use tankpump::app::control_loop::ControlLoop;
use tankpump::config::{ADC_MAX, SystemConfig};
use tankpump::error::DisplayError;
use tankpump::fsm::Condition;
use tankpump::fsm::context::{Button, Led};

#[derive(Default)]
struct Board {
    a_polls: u8,
    b_polls: u8,
    raw: u16,
    leds: [bool; 3],
    pump: bool,
    buzzer: bool,
    blank: bool,
}

impl InputPort for Board {
    fn button_pressed(&mut self, button: Button) -> bool {
        let polls = match button {
            Button::A => &mut self.a_polls,
            Button::B => &mut self.b_polls,
        };
        if *polls > 0 {
            *polls -= 1;
            true
        } else {
            false
        }
    }

    fn read_level_raw(&mut self) -> u16 {
        self.raw
    }
}

impl ActuatorPort for Board {
    fn set_led(&mut self, led: Led, on: bool) {
        self.leds[led as usize] = on;
    }
    fn set_pump(&mut self, on: bool) {
        self.pump = on;
    }
    fn set_buzzer(&mut self, active: bool) {
        self.buzzer = active;
    }
    fn all_off(&mut self) {
        self.leds = [false; 3];
        self.pump = false;
        self.buzzer = false;
    }
}

impl DisplayPort for Board {
    fn render_lines(&mut self, _lines: &[&str]) -> Result<(), DisplayError> {
        self.blank = false;
        Ok(())
    }
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.blank = true;
        Ok(())
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

struct NoEvents;

impl EventSink for NoEvents {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let config = SystemConfig::default();
    let threshold = config.analog_fault_threshold;
    let mut app = ControlLoop::new(config);
    let mut board = Board::default();
    app.start(&mut board, &mut NoEvents);

    for chunk in data.chunks_exact(4) {
        let flags = chunk[0];
        let hold = (flags >> 2) & 0x0F;
        let a = flags & 0x01 != 0;
        let b = flags & 0x02 != 0;
        board.a_polls = if a { hold + 1 } else { 0 };
        board.b_polls = if b { hold + 1 } else { 0 };
        board.raw = u16::from_le_bytes([chunk[2], chunk[3]]);

        let expected = if a {
            Condition::ButtonAHalfLevel
        } else if b {
            Condition::ButtonBQuarterLevel
        } else if board.raw.min(ADC_MAX) > threshold {
            Condition::AnalogFault
        } else {
            Condition::None
        };

        let condition = app.tick(&mut board, &mut NoDelay, &mut NoEvents);
        assert_eq!(condition, expected);
        assert_eq!(board.leds, [false; 3]);
        assert!(!board.pump && !board.buzzer);
        assert!(board.blank);
    }
});
