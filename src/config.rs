//! System configuration parameters
//!
//! Every tunable of the controller. The values are fixed at build time
//! through [`SystemConfig::default`]; there is no runtime provisioning.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest value the 12-bit level ADC can report.
pub const ADC_MAX: u16 = 4095;

/// Upper bound for the silence after each tone.
pub const MAX_TONE_PAD_MS: u32 = 10_000;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Level sensor ---
    /// Raw ADC reading above which the pump is declared faulty.
    pub analog_fault_threshold: u16,

    // --- Buttons ---
    /// Poll interval while waiting for a pressed button to be released (ms).
    pub debounce_poll_ms: u32,
    /// Give up waiting for a release after this long and treat the line as
    /// stuck. `None` waits forever.
    pub release_timeout_ms: Option<u32>,

    // --- Buzzer ---
    /// Square-wave frequency driven onto the buzzer pin (Hz).
    pub buzzer_frequency_hz: u32,
    /// PWM duty while a tone is sounding (1-100%).
    pub buzzer_duty_percent: u8,
    /// Silence appended after every tone (ms).
    pub tone_pad_ms: u32,

    // --- Timing ---
    /// Sleep between two control cycles (ms).
    pub cycle_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Level sensor
            analog_fault_threshold: 2000,

            // Buttons
            debounce_poll_ms: 10,
            release_timeout_ms: None,

            // Buzzer
            buzzer_frequency_hz: 100,
            buzzer_duty_percent: 50,
            tone_pad_ms: 100,

            // Timing
            cycle_interval_ms: 100,
        }
    }
}

impl SystemConfig {
    /// Reject parameter combinations the control loop cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.analog_fault_threshold >= ADC_MAX {
            return Err(Error::Config("analog_fault_threshold must be below ADC full scale"));
        }
        if self.debounce_poll_ms == 0 {
            return Err(Error::Config("debounce_poll_ms must be non-zero"));
        }
        if let Some(timeout) = self.release_timeout_ms {
            if timeout < self.debounce_poll_ms {
                return Err(Error::Config("release_timeout_ms shorter than one debounce poll"));
            }
        }
        if self.buzzer_frequency_hz == 0 {
            return Err(Error::Config("buzzer_frequency_hz must be non-zero"));
        }
        if self.buzzer_duty_percent == 0 || self.buzzer_duty_percent > 100 {
            return Err(Error::Config("buzzer_duty_percent must be 1-100"));
        }
        if self.tone_pad_ms > MAX_TONE_PAD_MS {
            return Err(Error::Config("tone_pad_ms above 10 s"));
        }
        Ok(())
    }
}
