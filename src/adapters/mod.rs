//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to                     |
//! |------------|--------------|---------------------------------|
//! | `hardware` | InputPort    | Button GPIOs, level ADC         |
//! |            | ActuatorPort | LED/pump GPIOs, buzzer LEDC PWM |
//! |            | DisplayPort  | SSD1306 OLED over I²C           |
//! | `log_sink` | EventSink    | Serial log output               |

pub mod hardware;
pub mod log_sink;
