//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (UART / USB-CDC in production, stderr on host).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | outputs off, display blank");
            }
            AppEvent::ConditionDetected { condition, snapshot } => {
                info!(
                    "COND  | {} | A={} B={} level_raw={}",
                    condition.name(),
                    u8::from(snapshot.button_a),
                    u8::from(snapshot.button_b),
                    snapshot.analog_raw,
                );
            }
            AppEvent::SequenceCompleted {
                condition,
                elapsed_ms,
            } => {
                info!("DONE  | {} | {} ms", condition.name(), elapsed_ms);
            }
            AppEvent::ButtonStuck(button) => {
                warn!("STUCK | button {:?} held past release timeout, ignored", button);
            }
        }
    }
}
