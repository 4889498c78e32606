//! Static actuation scripts, one per [`Condition`].
//!
//! Each script is a plain `&'static [Step]` with no closures or heap, so the
//! whole behaviour of the controller can be read (and asserted on) as data.
//! The [`Sequencer`](super::sequencer::Sequencer) replays a script verbatim
//! every time its condition fires.
//!
//! ```text
//!  ButtonA   clear ─ pump on ─ red+yellow ─ "50%" ─ 3.5s ─ LEDs off ─ FULL ─ 3.5s ─ clear
//!  ButtonB   clear ─ pump on ─ red        ─ "25%" ─ 2.0s ─ red off  ─ FULL ─ 3.5s ─ clear
//!  Fault     clear ─ pump off ─ red ─ "malfunction" ─ tone ─ red ×10 ─ tone ─ 2.5s ─ clear
//!  FULL      pump off ─ "tank full" ─ blue ×5
//! ```

use super::Condition;
use super::context::Led;

/// One instruction in an actuation script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Blank the panel.
    ClearDisplay,
    /// Replace the panel contents with these rows.
    Show(&'static [&'static str]),
    /// Drive a status LED.
    Led(Led, bool),
    /// Energise / release the pump relay.
    Pump(bool),
    /// Sound the buzzer for `ms`, then silence plus the configured pad.
    Tone(u32),
    /// Blocking sleep.
    Hold(u32),
    /// `times` × (on, `on_ms`, off, `off_ms`).
    Blink {
        led: Led,
        times: u8,
        on_ms: u32,
        off_ms: u32,
    },
    /// Run [`FULL_TANK`] in place.
    FullTank,
}

// ---------------------------------------------------------------------------
// Panel text
// ---------------------------------------------------------------------------

pub const HALF_LEVEL_TEXT: &[&str] = &["      50%", "   Water pump", "    engaged"];

pub const QUARTER_LEVEL_TEXT: &[&str] = &["", "   Tank at 25%", " Pump not engaged", "   Pump engaged"];

pub const FAULT_TEXT: &[&str] = &["   Tank at 25%", "      Pump", "   malfunction"];

pub const FULL_TANK_TEXT: &[&str] = &["", "    Tank full", "      Pump", "  switched off"];

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

pub const HALF_LEVEL_HOLD_MS: u32 = 3500;
pub const QUARTER_LEVEL_HOLD_MS: u32 = 2000;
pub const FULL_TANK_HOLD_MS: u32 = 3500;
pub const FAULT_TONE_MS: u32 = 500;
pub const FAULT_HOLD_MS: u32 = 2500;

pub const FULL_TANK_BLINKS: u8 = 5;
pub const FULL_TANK_BLINK_MS: u32 = 200;
pub const FAULT_BLINKS: u8 = 10;
pub const FAULT_BLINK_MS: u32 = 500;

// ---------------------------------------------------------------------------
// Scripts
// ---------------------------------------------------------------------------

/// Shared "tank full, pump off" tail of both button scripts.
pub const FULL_TANK: &[Step] = &[
    Step::Pump(false),
    Step::Show(FULL_TANK_TEXT),
    Step::Blink {
        led: Led::Blue,
        times: FULL_TANK_BLINKS,
        on_ms: FULL_TANK_BLINK_MS,
        off_ms: FULL_TANK_BLINK_MS,
    },
];

pub const HALF_LEVEL: &[Step] = &[
    Step::ClearDisplay,
    Step::Pump(true),
    Step::Led(Led::Red, true),
    Step::Led(Led::Yellow, true),
    Step::Show(HALF_LEVEL_TEXT),
    Step::Hold(HALF_LEVEL_HOLD_MS),
    Step::Led(Led::Red, false),
    Step::Led(Led::Yellow, false),
    Step::FullTank,
    Step::Hold(FULL_TANK_HOLD_MS),
    Step::ClearDisplay,
    Step::Led(Led::Yellow, false),
    Step::Led(Led::Red, false),
];

pub const QUARTER_LEVEL: &[Step] = &[
    Step::ClearDisplay,
    Step::Pump(true),
    Step::Led(Led::Red, true),
    Step::Led(Led::Yellow, false),
    Step::Led(Led::Blue, false),
    Step::Show(QUARTER_LEVEL_TEXT),
    Step::Hold(QUARTER_LEVEL_HOLD_MS),
    Step::Led(Led::Red, false),
    Step::FullTank,
    Step::Hold(FULL_TANK_HOLD_MS),
    Step::ClearDisplay,
];

pub const ANALOG_FAULT: &[Step] = &[
    Step::ClearDisplay,
    Step::Pump(false),
    Step::Led(Led::Red, true),
    Step::Led(Led::Blue, false),
    Step::Led(Led::Yellow, false),
    Step::Show(FAULT_TEXT),
    Step::Tone(FAULT_TONE_MS),
    Step::Blink {
        led: Led::Red,
        times: FAULT_BLINKS,
        on_ms: FAULT_BLINK_MS,
        off_ms: FAULT_BLINK_MS,
    },
    Step::Tone(FAULT_TONE_MS),
    Step::Hold(FAULT_HOLD_MS),
    Step::ClearDisplay,
    Step::Led(Led::Red, false),
];

/// The script for `condition`. `None` has an empty script.
pub fn sequence_for(condition: Condition) -> &'static [Step] {
    match condition {
        Condition::None => &[],
        Condition::ButtonAHalfLevel => HALF_LEVEL,
        Condition::ButtonBQuarterLevel => QUARTER_LEVEL,
        Condition::AnalogFault => ANALOG_FAULT,
    }
}

/// Total blocking time of `steps`, with [`Step::FullTank`] expanded.
pub fn scripted_duration_ms(steps: &[Step], tone_pad_ms: u32) -> u32 {
    steps
        .iter()
        .map(|step| match *step {
            Step::ClearDisplay | Step::Show(_) | Step::Led(..) | Step::Pump(_) => 0,
            Step::Tone(ms) => ms.saturating_add(tone_pad_ms),
            Step::Hold(ms) => ms,
            Step::Blink {
                times,
                on_ms,
                off_ms,
                ..
            } => u32::from(times).saturating_mul(on_ms.saturating_add(off_ms)),
            Step::FullTank => scripted_duration_ms(FULL_TANK, tone_pad_ms),
        })
        .fold(0, u32::saturating_add)
}
