//! Peripheral drivers and one-shot hardware initialisation.

pub mod button;
pub mod buzzer;
pub mod display;
pub mod hw_init;
pub mod pump;
pub mod status_led;
