//! Analog tank-level / pump-sense channel.
//!
//! A single ADC1 channel read in oneshot mode at 12-bit width. The raw
//! value is reported unfiltered; the classifier compares it against the
//! fault threshold.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the real ADC via hw_init helpers.
//! On host/test: returns a simulated value (defaults to 0, an idle tank).

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

use log::warn;

use crate::config::ADC_MAX;

#[cfg(not(target_os = "espidf"))]
static SIM_LEVEL_RAW: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_level_raw(raw: u16) {
    SIM_LEVEL_RAW.store(raw, Ordering::Relaxed);
}

pub struct LevelSensor {
    channel: u32,
    last_raw: u16,
}

impl LevelSensor {
    pub fn new(channel: u32) -> Self {
        Self {
            channel,
            last_raw: 0,
        }
    }

    /// Sample the channel. A failed conversion keeps the previous value.
    pub fn read(&mut self) -> u16 {
        match self.read_hw() {
            Ok(raw) => self.last_raw = raw.min(ADC_MAX),
            Err(e) => warn!("Level ADC ch{}: {} (holding {})", self.channel, e, self.last_raw),
        }
        self.last_raw
    }

    pub fn last_raw(&self) -> u16 {
        self.last_raw
    }

    #[cfg(target_os = "espidf")]
    fn read_hw(&self) -> Result<u16, crate::error::SensorError> {
        crate::drivers::hw_init::adc1_read(self.channel)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_hw(&self) -> Result<u16, crate::error::SensorError> {
        Ok(SIM_LEVEL_RAW.load(Ordering::Relaxed))
    }
}
