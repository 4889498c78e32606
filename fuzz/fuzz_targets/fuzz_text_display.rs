//! Fuzz target: `TextDisplay::show` and the `DisplayState` mirror
//!
//! Splits arbitrary UTF-8 on newlines and renders it through the real
//! frame buffer and SSD1306 flush path on a null I²C bus.
//!
//! Invariants checked:
//! - No panics for any text, any number of rows, any row length
//! - The mirror never holds more rows or characters than the panel fits
//! - `clear()` always leaves a blank frame
//!
//! cargo fuzz run fuzz_text_display

#![no_main]

use core::convert::Infallible;

use embedded_hal::i2c::{ErrorType, I2c, Operation};
use libfuzzer_sys::fuzz_target;
use tankpump::drivers::display::TextDisplay;
use tankpump::fsm::context::{DisplayState, LINE_CHARS, MAX_LINES};

struct NullBus;

impl ErrorType for NullBus {
    type Error = Infallible;
}

impl I2c for NullBus {
    fn transaction(&mut self, _address: u8, _ops: &mut [Operation<'_>]) -> Result<(), Infallible> {
        Ok(())
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let lines: Vec<&str> = text.split('\n').collect();

    let mut display = TextDisplay::new(NullBus);
    display.show(&lines).unwrap();

    let mut mirror = DisplayState::new();
    mirror.show(&lines);
    assert!(mirror.len() <= MAX_LINES);
    assert!(mirror.lines().all(|l| l.chars().count() <= LINE_CHARS));

    display.clear().unwrap();
    assert!(display.frame().is_blank());
});
