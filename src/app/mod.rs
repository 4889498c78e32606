//! Application core — pure control logic, zero I/O.
//!
//! This module contains the business rules for the tank pump controller:
//! the polling cycle that samples inputs, classifies them, and replays the
//! matching actuation script. All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod control_loop;
pub mod events;
pub mod ports;
