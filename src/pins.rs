//! GPIO / peripheral pin assignments for the controller board.
//!
//! Single source of truth for wiring. `main` picks the typed esp-idf-hal
//! pins that match these numbers; `hw_init` uses the ADC channel directly.

// ---------------------------------------------------------------------------
// Operator buttons (active-low, internal pull-up)
// ---------------------------------------------------------------------------

/// Button A: operator reports the tank at 50%.
pub const BUTTON_A_GPIO: i32 = 5;
/// Button B: operator reports the tank at 25%.
pub const BUTTON_B_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// Status LEDs (discrete, active HIGH)
// ---------------------------------------------------------------------------

pub const LED_YELLOW_GPIO: i32 = 11;
pub const LED_BLUE_GPIO: i32 = 12;
pub const LED_RED_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// Pump relay
// ---------------------------------------------------------------------------

/// Digital output: HIGH energises the pump relay coil.
pub const PUMP_RELAY_GPIO: i32 = 10;

// ---------------------------------------------------------------------------
// Buzzer (passive, LEDC PWM)
// ---------------------------------------------------------------------------

pub const BUZZER_GPIO: i32 = 21;

// ---------------------------------------------------------------------------
// Level sensor (ADC1)
// ---------------------------------------------------------------------------

/// Analog level / pump-current sense. ADC1 channel 3 (GPIO 4 on ESP32-S3).
pub const LEVEL_ADC_GPIO: i32 = 4;
pub const LEVEL_ADC_CHANNEL: u32 = 3;

// ---------------------------------------------------------------------------
// I²C bus — SSD1306 128×64 OLED
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 14;
pub const I2C_SCL_GPIO: i32 = 15;
/// Bus clock for the OLED (Hz).
pub const I2C_BAUDRATE_HZ: u32 = 400_000;
