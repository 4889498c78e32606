//! Mock hardware adapter for integration tests.
//!
//! Records every actuator and display call, stamped with a shared mock
//! clock, so tests can assert on the full command history and on how long
//! each output stayed on. The clock only advances through [`MockDelay`].

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use tankpump::app::events::AppEvent;
use tankpump::app::ports::{ActuatorPort, DisplayPort, EventSink, InputPort};
use tankpump::error::DisplayError;
use tankpump::fsm::context::{Button, Led};

// ── Clock ─────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockClock(Rc<Cell<u64>>);

impl MockClock {
    pub fn now_ms(&self) -> u64 {
        self.0.get()
    }

    fn advance_ms(&self, ms: u64) {
        self.0.set(self.0.get() + ms);
    }
}

/// `DelayNs` that sleeps on the mock clock only.
pub struct MockDelay {
    clock: MockClock,
}

impl MockDelay {
    pub fn new(clock: &MockClock) -> Self {
        Self {
            clock: clock.clone(),
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance_ms(u64::from(ns) / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.clock.advance_ms(u64::from(ms));
    }
}

// ── Button lines ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Released,
    /// Pressed while the clock is before this instant.
    HeldUntil(u64),
    HeldForever,
}

impl Line {
    fn pressed_at(self, now: u64) -> bool {
        match self {
            Line::Released => false,
            Line::HeldUntil(t) => now < t,
            Line::HeldForever => true,
        }
    }
}

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HwCall {
    Led(Led, bool),
    Pump(bool),
    Buzzer(bool),
    AllOff,
    Render(Vec<String>),
    Clear,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    clock: MockClock,
    pub button_a: Line,
    pub button_b: Line,
    pub level_raw: u16,
    /// `(t, raw)`: from `t` ms onward the level reads `raw`.
    pub level_change: Option<(u64, u16)>,
    pub display_fails: bool,
    pub calls: Vec<(u64, HwCall)>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new(clock: &MockClock) -> Self {
        Self {
            clock: clock.clone(),
            button_a: Line::Released,
            button_b: Line::Released,
            level_raw: 0,
            level_change: None,
            display_fails: false,
            calls: Vec::new(),
        }
    }

    fn record(&mut self, call: HwCall) {
        self.calls.push((self.clock.now_ms(), call));
    }

    /// Calls without timestamps.
    pub fn trace(&self) -> Vec<HwCall> {
        self.calls.iter().map(|(_, c)| c.clone()).collect()
    }

    /// Last commanded level of `led` (false if never driven).
    pub fn led_on(&self, led: Led) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|(_, c)| match c {
                HwCall::Led(l, on) if *l == led => Some(*on),
                HwCall::AllOff => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn pump_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|(_, c)| match c {
                HwCall::Pump(on) => Some(*on),
                HwCall::AllOff => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// Number of off→on transitions commanded for `led`.
    pub fn led_rising_edges(&self, led: Led) -> usize {
        let mut on = false;
        let mut edges = 0;
        for (_, c) in &self.calls {
            match c {
                HwCall::Led(l, level) if *l == led => {
                    if *level && !on {
                        edges += 1;
                    }
                    on = *level;
                }
                HwCall::AllOff => on = false,
                _ => {}
            }
        }
        edges
    }

    /// `(on_at, off_at)` for every interval `led` was lit.
    pub fn led_intervals(&self, led: Led) -> Vec<(u64, u64)> {
        let mut since = None;
        let mut out = Vec::new();
        for (t, c) in &self.calls {
            match c {
                HwCall::Led(l, true) if *l == led => {
                    since.get_or_insert(*t);
                }
                HwCall::Led(l, false) if *l == led => {
                    if let Some(start) = since.take() {
                        out.push((start, *t));
                    }
                }
                HwCall::AllOff => {
                    if let Some(start) = since.take() {
                        out.push((start, *t));
                    }
                }
                _ => {}
            }
        }
        out
    }

    pub fn renders(&self) -> Vec<Vec<String>> {
        self.calls
            .iter()
            .filter_map(|(_, c)| match c {
                HwCall::Render(lines) => Some(lines.clone()),
                _ => None,
            })
            .collect()
    }

    /// Whether the panel is blank after the last display call.
    pub fn display_blank(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|(_, c)| match c {
                HwCall::Clear => Some(true),
                HwCall::Render(_) => Some(false),
                _ => None,
            })
            .unwrap_or(true)
    }
}

impl InputPort for MockHardware {
    fn button_pressed(&mut self, button: Button) -> bool {
        let now = self.clock.now_ms();
        match button {
            Button::A => self.button_a.pressed_at(now),
            Button::B => self.button_b.pressed_at(now),
        }
    }

    fn read_level_raw(&mut self) -> u16 {
        match self.level_change {
            Some((t, raw)) if self.clock.now_ms() >= t => raw,
            _ => self.level_raw,
        }
    }
}

impl ActuatorPort for MockHardware {
    fn set_led(&mut self, led: Led, on: bool) {
        self.record(HwCall::Led(led, on));
    }

    fn set_pump(&mut self, on: bool) {
        self.record(HwCall::Pump(on));
    }

    fn set_buzzer(&mut self, active: bool) {
        self.record(HwCall::Buzzer(active));
    }

    fn all_off(&mut self) {
        self.record(HwCall::AllOff);
    }
}

impl DisplayPort for MockHardware {
    fn render_lines(&mut self, lines: &[&str]) -> Result<(), DisplayError> {
        if self.display_fails {
            return Err(DisplayError::Bus);
        }
        self.record(HwCall::Render(lines.iter().map(|l| (*l).to_string()).collect()));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        if self.display_fails {
            return Err(DisplayError::Bus);
        }
        self.record(HwCall::Clear);
        Ok(())
    }
}

// ── Event recorder ────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
