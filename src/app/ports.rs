//! Port traits — the hexagonal boundary between control logic and hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlLoop (domain)
//! ```
//!
//! Driven adapters (buttons, level ADC, LEDs, pump relay, buzzer, OLED,
//! event sinks) implement these traits. The
//! [`ControlLoop`](super::control_loop::ControlLoop) consumes them via
//! generics, so the domain core never touches hardware directly. Blocking
//! delays come in separately through `embedded_hal::delay::DelayNs`.

use crate::error::DisplayError;
use crate::fsm::context::{Button, Led};

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain polls this every cycle.
pub trait InputPort {
    /// `true` while the button's line reads low (pressed).
    fn button_pressed(&mut self, button: Button) -> bool;

    /// Raw 12-bit reading of the level channel (0 – 4095).
    fn read_level_raw(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for every digital/PWM output.
pub trait ActuatorPort {
    /// Drive one status LED.
    fn set_led(&mut self, led: Led, on: bool);

    /// Energise or release the pump relay.
    fn set_pump(&mut self, on: bool);

    /// Start (`true`) or silence (`false`) the buzzer square wave.
    fn set_buzzer(&mut self, active: bool);

    /// Pump, LEDs and buzzer off.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → presentation sink)
// ───────────────────────────────────────────────────────────────

/// Text-only presentation sink.
pub trait DisplayPort {
    /// Blank the panel, draw each line on its own row, then flush.
    fn render_lines(&mut self, lines: &[&str]) -> Result<(), DisplayError>;

    /// Blank the panel and flush.
    fn clear(&mut self) -> Result<(), DisplayError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
